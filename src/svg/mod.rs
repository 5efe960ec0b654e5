//! SVG extraction and icon code generation.
//!
//! ```text
//! raw svg ──► extract ──► { viewBox, inner } ──► template ──► React / Vue / Svelte / SVG
//! ```

mod extract;
mod source;
mod template;

pub use extract::{DEFAULT_VIEWBOX, SvgParts, extract};
pub use source::{PLACEHOLDER_SVG, load_svg};
pub use template::{TemplateKind, generate, sanitize_name};
