//! Loading the SVG shown for a selected asset.

use crate::catalog::Asset;
use crate::export::Fetcher;
use crate::log;

/// Shown for assets without a vector logo, or when loading one fails.
pub const PLACEHOLDER_SVG: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
<path d="M12 2L2 7L12 12L22 7L12 2Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
<path d="M2 17L12 22L22 17" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
<path d="M2 12L12 17L22 12" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
</svg>"#;

/// SVG markup for `asset`, never failing.
pub async fn load_svg<F: Fetcher + ?Sized>(asset: &Asset, fetcher: &F) -> String {
    if !asset.has_vector_logo() {
        return PLACEHOLDER_SVG.to_string();
    }

    match fetcher.fetch(&asset.logo_url).await {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                log!("fetch"; "{} is not utf-8 text: {}", asset.logo_url, err);
                PLACEHOLDER_SVG.to_string()
            }
        },
        Err(err) => {
            log!("fetch"; "failed to load {}: {}", asset.logo_url, err);
            PLACEHOLDER_SVG.to_string()
        }
    }
}
