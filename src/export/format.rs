//! Download formats for a single asset.

/// Target format of a single-asset download.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ExportFormat {
    /// Original vector markup, no rasterization.
    #[default]
    SVG,
    /// PNG bitmap.
    PNG,
    /// WebP bitmap.
    WEBP,
}

impl ExportFormat {
    /// Get file extension for this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::SVG => "svg",
            Self::PNG => "png",
            Self::WEBP => "webp",
        }
    }

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SVG => "SVG",
            Self::PNG => "PNG",
            Self::WEBP => "WebP",
        }
    }

    /// Bitmap encoding, or `None` for the vector format.
    pub const fn raster(self) -> Option<RasterMime> {
        match self {
            Self::SVG => None,
            Self::PNG => Some(RasterMime::Png),
            Self::WEBP => Some(RasterMime::Webp),
        }
    }
}

/// Bitmap encodings the rasterizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterMime {
    Png,
    Webp,
}

impl RasterMime {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => crate::utils::mime::types::PNG,
            Self::Webp => crate::utils::mime::types::WEBP,
        }
    }

    pub(super) const fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Webp => image::ImageFormat::WebP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_and_raster() {
        assert_eq!(ExportFormat::SVG.extension(), "svg");
        assert_eq!(ExportFormat::WEBP.extension(), "webp");
        assert_eq!(ExportFormat::SVG.raster(), None);
        assert_eq!(ExportFormat::PNG.raster(), Some(RasterMime::Png));
        assert_eq!(ExportFormat::WEBP.raster().map(RasterMime::as_str), Some("image/webp"));
    }
}
