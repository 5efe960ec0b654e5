//! Code templates for SVG icons.
//!
//! Wraps extracted SVG markup into one of the supported output shapes. The
//! transform is purely textual; nothing checks that the result is valid in
//! the target templating language.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::extract::{SvgParts, extract};

static RE_FILL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"fill="([^"]*)""#).unwrap());
static RE_FILL_OPACITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"fill-opacity="[^"]*""#).unwrap());
static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"class=").unwrap());

/// Output shape of generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// JSX function component with `size` / `color` props.
    #[default]
    React,
    /// Single-file component: `<script setup>` + `<template>` blocks.
    Vue,
    /// Single-file component: `<script>` block + markup.
    Svelte,
    /// Bare `<svg>` markup, content untouched.
    Markup,
}

impl TemplateKind {
    pub const ALL: [Self; 4] = [Self::React, Self::Vue, Self::Svelte, Self::Markup];

    /// Map a format token (`React`, `Vue`, `Svelte`, `HTML`, `SVG`) to a kind.
    ///
    /// Matching is case-insensitive. Unrecognized tokens fall back to raw
    /// markup.
    pub fn from_token(token: &str) -> Self {
        Self::parse_token(token).unwrap_or(Self::Markup)
    }

    /// Strict variant of [`from_token`](Self::from_token).
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "react" => Some(Self::React),
            "vue" => Some(Self::Vue),
            "svelte" => Some(Self::Svelte),
            "html" | "svg" => Some(Self::Markup),
            _ => None,
        }
    }

    /// Display label for the format picker.
    pub const fn label(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Vue => "Vue",
            Self::Svelte => "Svelte",
            Self::Markup => "SVG",
        }
    }
}

/// Strip every character outside `[A-Za-z0-9]`.
///
/// The result is used verbatim as a component identifier. A name that ends
/// up empty or starting with a digit still gets templated.
pub fn sanitize_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Rewrite literal fills to `binding`, leaving `fill="none"` alone.
fn bind_fills(content: &str, binding: &str) -> String {
    RE_FILL
        .replace_all(content, |caps: &Captures<'_>| {
            if &caps[1] == "none" {
                caps[0].to_string()
            } else {
                binding.to_string()
            }
        })
        .into_owned()
}

/// Generate source code for `markup` in the given shape.
///
/// Pure function of its inputs.
pub fn generate(kind: TemplateKind, markup: &str, display_name: &str) -> String {
    let SvgParts { view_box, inner } = extract(markup);
    let name = sanitize_name(display_name);

    match kind {
        TemplateKind::React => {
            let content = bind_fills(&inner, "fill={color}");
            let content = RE_FILL_OPACITY.replace_all(&content, "");
            let content = RE_CLASS.replace_all(&content, "className=");
            format!(
                r##"export const {name} = ({{ size = 24, color = "#000000" }}) => {{
  return (
    <svg width={{size}} height={{size}} viewBox="{view_box}" fill={{color}} xmlns="http://www.w3.org/2000/svg">
      {content}
    </svg>
  );
}};"##
            )
        }
        TemplateKind::Vue => {
            let content = bind_fills(&inner, r#":fill="color""#);
            format!(
                r##"<script setup>
  defineProps({{ size: {{ type: Number, default: 24 }}, color: {{ type: String, default: "#000000" }} }});
</script>

<template>
  <svg :width="size" :height="size" viewBox="{view_box}" :fill="color" xmlns="http://www.w3.org/2000/svg">
    {content}
  </svg>
</template>"##
            )
        }
        TemplateKind::Svelte => {
            let content = bind_fills(&inner, "fill={color}");
            format!(
                r##"<script>
  export let size = 24;
  export let color = "#000000";
</script>

<svg width="{{size}}" height="{{size}}" viewBox="{view_box}" fill={{color}} xmlns="http://www.w3.org/2000/svg">
  {content}
</svg>"##
            )
        }
        TemplateKind::Markup => raw_markup(&view_box, &inner),
    }
}

/// Fixed-attribute `<svg>` wrapper around unmodified content.
fn raw_markup(view_box: &str, inner: &str) -> String {
    format!(
        r##"<svg width="24" height="24" viewBox="{view_box}" fill="#000000" xmlns="http://www.w3.org/2000/svg">
  {inner}
</svg>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 16">
<rect class="bg" width="48" height="16" fill="#1A1F71" fill-opacity="0.9"/>
<path d="M4 4h8" fill="none" stroke="#F7B600"/>
<path d="M20 4h8" fill="#FFFFFF"/>
</svg>"##;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Visa Card!"), "VisaCard");
        assert_eq!(sanitize_name("Aman Bank (new)"), "AmanBanknew");
        assert_eq!(sanitize_name("مصرف"), "");
        assert_eq!(sanitize_name("1Pay"), "1Pay");
    }

    #[test]
    fn test_from_token() {
        assert_eq!(TemplateKind::from_token("React"), TemplateKind::React);
        assert_eq!(TemplateKind::from_token("vue"), TemplateKind::Vue);
        assert_eq!(TemplateKind::from_token("SVELTE"), TemplateKind::Svelte);
        assert_eq!(TemplateKind::from_token("HTML"), TemplateKind::Markup);
        assert_eq!(TemplateKind::from_token("SVG"), TemplateKind::Markup);
        assert_eq!(TemplateKind::from_token("Angular"), TemplateKind::Markup);
        assert_eq!(TemplateKind::parse_token("Angular"), None);
        assert_eq!(TemplateKind::parse_token(" Html "), Some(TemplateKind::Markup));
    }

    #[test]
    fn test_react_template() {
        let code = generate(TemplateKind::React, LOGO, "Visa Card!");
        assert!(code.starts_with("export const VisaCard = ({ size = 24, color = \"#000000\" }) => {"));
        assert!(code.contains(r#"viewBox="0 0 48 16" fill={color}"#));
        assert!(code.contains(r#"<rect className="bg" width="48" height="16" fill={color} />"#));
        assert!(code.contains(r##"<path d="M4 4h8" fill="none" stroke="#F7B600"/>"##));
        assert!(code.contains(r#"<path d="M20 4h8" fill={color}/>"#));
        assert!(!code.contains("fill-opacity"));
        assert!(!code.contains("#1A1F71"));
    }

    #[test]
    fn test_vue_template() {
        let code = generate(TemplateKind::Vue, LOGO, "Visa");
        assert!(code.starts_with("<script setup>"));
        assert!(code.contains("<template>"));
        assert!(code.contains(r#"<path d="M20 4h8" :fill="color"/>"#));
        assert!(code.contains(r#"fill="none""#));
        // only the plain component strips opacity
        assert!(code.contains(r#"fill-opacity="0.9""#));
        assert!(!code.contains("#FFFFFF"));
    }

    #[test]
    fn test_svelte_template() {
        let code = generate(TemplateKind::Svelte, LOGO, "Visa");
        assert!(code.starts_with("<script>\n  export let size = 24;"));
        assert!(code.contains(r#"<svg width="{size}" height="{size}" viewBox="0 0 48 16""#));
        assert!(code.contains(r#"<path d="M20 4h8" fill={color}/>"#));
        assert!(code.contains(r#"fill="none""#));
    }

    #[test]
    fn test_fill_none_is_never_rewritten() {
        let svg = r#"<svg viewBox="0 0 2 2"><path fill="none"/><path fill="none"/></svg>"#;
        for kind in TemplateKind::ALL {
            let code = generate(kind, svg, "Icon");
            assert_eq!(code.matches(r#"fill="none""#).count(), 2, "{kind:?}");
        }
    }

    #[test]
    fn test_fill_containing_none_is_rewritten() {
        let svg = r#"<svg><path fill="nonexistent"/></svg>"#;
        let code = generate(TemplateKind::Svelte, svg, "Icon");
        assert!(code.contains("<path fill={color}/>"));
    }

    #[test]
    fn test_markup_reproduces_inner_content() {
        let parts = extract(LOGO);
        let code = generate(TemplateKind::Markup, LOGO, "ignored");
        let expected = format!(
            "<svg width=\"24\" height=\"24\" viewBox=\"0 0 48 16\" fill=\"#000000\" xmlns=\"http://www.w3.org/2000/svg\">\n  {}\n</svg>",
            parts.inner
        );
        assert_eq!(code, expected);
        assert!(code.contains("#1A1F71"));
        assert!(code.contains(r#"class="bg""#));
    }

    #[test]
    fn test_empty_name_still_wraps() {
        let code = generate(TemplateKind::React, LOGO, "!!!");
        assert!(code.starts_with("export const  = ("));
    }

    #[test]
    fn test_rootless_input_uses_defaults() {
        let code = generate(TemplateKind::Vue, "<<not svg", "Icon");
        assert!(code.contains(r#"viewBox="0 0 24 24""#));
        assert!(code.contains("<template>"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        for kind in TemplateKind::ALL {
            assert_eq!(generate(kind, LOGO, "Visa"), generate(kind, LOGO, "Visa"));
        }
    }
}
