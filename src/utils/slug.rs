//! Filename slugs derived from display names and labels.

use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Replace every whitespace run with a single `-`, keeping case.
///
/// `"Nuran  Bank"` -> `"Nuran-Bank"`
pub fn hyphenate(input: &str) -> String {
    RE_WHITESPACE.replace_all(input, "-").into_owned()
}

/// Lowercase and hyphenate: `"Home Dashboard"` -> `"home-dashboard"`.
///
/// Only whitespace is touched; punctuation passes through unchanged.
pub fn slug(input: &str) -> String {
    hyphenate(&input.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenate_keeps_case() {
        assert_eq!(hyphenate("Nuran Bank"), "Nuran-Bank");
        assert_eq!(hyphenate("Sahara \t Bank"), "Sahara-Bank");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Home Dashboard"), "home-dashboard");
        assert_eq!(slug("Card  Details"), "card-details");
        assert_eq!(slug("Login"), "login");
        assert_eq!(slug("Visa Card!"), "visa-card!");
    }

    #[test]
    fn test_slug_edge_whitespace() {
        assert_eq!(slug(" Splash Screen "), "-splash-screen-");
        assert_eq!(slug(""), "");
    }
}
