//! MIME type utilities.
//!
//! Provides consistent MIME type handling for blobs, data URLs and fetched assets.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    // Text
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const XML: &str = "application/xml";

    // Binary
    pub const OCTET_STREAM: &str = "application/octet-stream";
    pub const ZIP: &str = "application/zip";

    // Images
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
}

/// Guess MIME type from file extension.
pub fn from_path(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Guess MIME type from file extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext.map(str::to_ascii_lowercase).as_deref() {
        Some("svg") => types::SVG,
        Some("png") => types::PNG,
        Some("jpg" | "jpeg") => types::JPEG,
        Some("gif") => types::GIF,
        Some("webp") => types::WEBP,
        Some("avif") => types::AVIF,
        Some("xml") => types::XML,
        Some("txt") => types::PLAIN,
        Some("zip") => types::ZIP,
        _ => types::OCTET_STREAM,
    }
}

/// Strip parameters from a MIME type: `image/svg+xml;charset=utf-8` -> `image/svg+xml`.
pub fn essence(mime: &str) -> &str {
    mime.split(';').next().unwrap_or(mime).trim()
}

/// Check if the MIME type represents an image.
pub fn is_image(mime: &str) -> bool {
    essence(mime).starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(&PathBuf::from("logos/nuran.svg")), types::SVG);
        assert_eq!(from_path(&PathBuf::from("shot.PNG")), types::PNG);
        assert_eq!(from_path(&PathBuf::from("photo.jpeg")), types::JPEG);
        assert_eq!(from_path(&PathBuf::from("kit.zip")), types::ZIP);
        assert_eq!(from_path(&PathBuf::from("unknown.xyz")), types::OCTET_STREAM);
        assert_eq!(from_path(&PathBuf::from("noext")), types::OCTET_STREAM);
    }

    #[test]
    fn test_essence() {
        assert_eq!(essence("image/svg+xml;charset=utf-8"), types::SVG);
        assert_eq!(essence("image/png"), "image/png");
        assert_eq!(essence(" text/plain ; charset=utf-8"), "text/plain");
    }

    #[test]
    fn test_is_image() {
        assert!(is_image(types::PNG));
        assert!(is_image("image/svg+xml;charset=utf-8"));
        assert!(!is_image(types::ZIP));
    }
}
