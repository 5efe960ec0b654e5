//! Deterministic download names.

use super::ExportFormat;
use crate::catalog::Asset;
use crate::utils::slug::{hyphenate, slug};

/// Variant name treated as "no variant".
const DEFAULT_VARIANT: &str = "default";

/// `{id}-{slug(name)}[-{slug(variant)}].{ext}`
///
/// The variant suffix is only added for a non-default visual variant.
pub fn asset_filename(asset: &Asset, variant: Option<&str>, format: ExportFormat) -> String {
    let mut name = format!("{}-{}", asset.id, slug(&asset.name));
    if let Some(variant) = variant
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(DEFAULT_VARIANT))
    {
        name.push('-');
        name.push_str(&slug(variant));
    }
    format!("{name}.{}", format.extension())
}

/// Archive entry name of one screenshot: `{slug(label)}.png`.
pub fn screenshot_entry(label: &str) -> String {
    format!("{}.png", slug(label))
}

/// Standalone screenshot download: `{slug(collection)}-{slug(label)}.png`.
pub fn screenshot_filename(collection: &str, label: &str) -> String {
    format!("{}-{}.png", slug(collection), slug(label))
}

/// Folder inside the archive (case preserved).
pub fn archive_folder(collection: &str) -> String {
    hyphenate(collection)
}

/// `{slug(collection)}-ui-kit.zip`
pub fn archive_filename(collection: &str) -> String {
    format!("{}-ui-kit.zip", slug(collection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetKind;

    fn asset(id: &str, name: &str) -> Asset {
        Asset {
            id: id.to_string(),
            name: name.to_string(),
            logo_url: format!("/logos/{id}.svg"),
            colors: Vec::new(),
            kind: AssetKind::Bank,
            is_new: false,
            is_updated: false,
            website: None,
            figma_url: None,
            has_screenshots: false,
        }
    }

    #[test]
    fn test_asset_filename() {
        let nuran = asset("nuran-bank", "Nuran  Bank");
        assert_eq!(
            asset_filename(&nuran, None, ExportFormat::SVG),
            "nuran-bank-nuran-bank.svg"
        );
        assert_eq!(
            asset_filename(&nuran, None, ExportFormat::WEBP),
            "nuran-bank-nuran-bank.webp"
        );
    }

    #[test]
    fn test_asset_filename_variant() {
        let visa = asset("visa", "Visa");
        assert_eq!(
            asset_filename(&visa, Some("Dark Mono"), ExportFormat::PNG),
            "visa-visa-dark-mono.png"
        );
        assert_eq!(asset_filename(&visa, Some("default"), ExportFormat::PNG), "visa-visa.png");
        assert_eq!(asset_filename(&visa, Some("  "), ExportFormat::PNG), "visa-visa.png");
    }

    #[test]
    fn test_screenshot_names() {
        assert_eq!(screenshot_entry("Home Dashboard"), "home-dashboard.png");
        assert_eq!(screenshot_filename("Nuran Bank", "Splash Screen"), "nuran-bank-splash-screen.png");
    }

    #[test]
    fn test_archive_names() {
        assert_eq!(archive_folder("Nuran Bank"), "Nuran-Bank");
        assert_eq!(archive_filename("Nuran Bank"), "nuran-bank-ui-kit.zip");
    }
}
