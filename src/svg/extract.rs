//! SVG root extraction.
//!
//! Splits an SVG document into its `viewBox` and the markup inside the root
//! `<svg>` element. Extraction never fails: documents that are not
//! well-formed or have no `<svg>` element degrade to [`SvgParts::default`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// viewBox used when the root has none (or the document is unusable).
pub const DEFAULT_VIEWBOX: &str = "0 0 24 24";

/// The two pieces of an SVG document the code templates need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgParts {
    /// Root `viewBox`, verbatim.
    pub view_box: String,
    /// Source text between the root's start and end tags, trimmed.
    pub inner: String,
}

impl Default for SvgParts {
    fn default() -> Self {
        Self {
            view_box: DEFAULT_VIEWBOX.to_string(),
            inner: String::new(),
        }
    }
}

/// Extract viewBox and inner markup of the first `<svg>` element.
pub fn extract(markup: &str) -> SvgParts {
    scan(markup).unwrap_or_default()
}

/// Walk the whole document. `None` means "degrade": malformed XML, stray
/// top-level text, an unclosed element, or no `<svg>` at all.
fn scan(markup: &str) -> Option<SvgParts> {
    // The reader skips a BOM without counting it in `buffer_position`.
    let markup = markup.strip_prefix('\u{FEFF}').unwrap_or(markup);
    let mut reader = Reader::from_str(markup);

    let mut depth = 0usize;
    // (depth of root svg, viewBox, byte offset after its start tag)
    let mut root: Option<(usize, String, usize)> = None;
    let mut parts: Option<SvgParts> = None;

    loop {
        let before = reader.buffer_position() as usize;
        let event = reader.read_event().ok()?;
        let after = reader.buffer_position() as usize;

        match event {
            Event::Start(e) => {
                if root.is_none() && parts.is_none() && is_svg(&e) {
                    root = Some((depth, view_box(&e), after));
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if root.is_none() && parts.is_none() && is_svg(&e) {
                    parts = Some(SvgParts {
                        view_box: view_box(&e),
                        inner: String::new(),
                    });
                }
            }
            Event::End(_) => {
                depth = depth.checked_sub(1)?;
                if root.as_ref().is_some_and(|(d, _, _)| *d == depth)
                    && let Some((_, view_box, start)) = root.take()
                {
                    parts = Some(SvgParts {
                        view_box,
                        inner: markup.get(start..before)?.trim().to_string(),
                    });
                }
            }
            Event::Text(t) if depth == 0 => {
                if !t.iter().all(u8::is_ascii_whitespace) {
                    return None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    parts
}

fn is_svg(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == b"svg"
}

/// Read `viewBox`, falling back to the default when absent or empty.
fn view_box(e: &BytesStart<'_>) -> String {
    let Ok(Some(attr)) = e.try_get_attribute("viewBox") else {
        return DEFAULT_VIEWBOX.to_string();
    };
    let raw = String::from_utf8_lossy(&attr.value);
    let value = quick_xml::escape::unescape(&raw)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    if value.is_empty() {
        DEFAULT_VIEWBOX.to_string()
    } else {
        value
    }
}
