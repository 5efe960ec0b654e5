//! `logokit list`: catalog search.

use anyhow::Result;
use std::process::ExitCode;

use super::common::load_catalog;
use crate::catalog::{Asset, AssetKind, Catalog};
use crate::config::LogokitConfig;

pub fn run_list(config: &LogokitConfig, query: Option<&str>, kind: Option<AssetKind>) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let found = catalog.search(query.unwrap_or_default(), kind);
    print!("{}", render_listing(&catalog, &found));
    Ok(ExitCode::SUCCESS)
}

/// One line per asset: id, name, kind, then tags.
fn render_listing(catalog: &Catalog, assets: &[&Asset]) -> String {
    if assets.is_empty() {
        return "no matching assets\n".to_string();
    }

    let width = assets.iter().map(|a| a.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for asset in assets {
        let kind = match asset.kind {
            AssetKind::Bank => "bank",
            AssetKind::PaymentMethod => "payment",
        };
        let mut tags = Vec::new();
        if asset.is_new {
            tags.push("new".to_string());
        }
        if asset.is_updated {
            tags.push("updated".to_string());
        }
        let shots = catalog.screenshots_of(&asset.id).len();
        if shots > 0 {
            tags.push(format!("{shots} screenshots"));
        }

        out.push_str(&format!("{:<width$}  {}  ({kind})", asset.id, asset.name));
        if !tags.is_empty() {
            out.push_str(&format!("  [{}]", tags.join(", ")));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
  "assets": [
    { "id": "visa", "name": "Visa", "logoUrl": "/logos/visa.svg", "type": "payment_method", "isNew": true },
    { "id": "nuran-bank", "name": "Nuran Bank", "logoUrl": "/logos/nuran.png", "type": "bank" }
  ],
  "screenshots": {
    "nuran-bank": [
      { "id": "1", "url": "/shots/login.png", "label": "Login", "category": "auth" }
    ]
  }
}"#;

    #[test]
    fn test_render_listing() {
        let catalog = Catalog::from_str(CATALOG).unwrap();
        let found = catalog.search("", None);
        let listing = render_listing(&catalog, &found);

        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "visa        Visa  (payment)  [new]");
        assert_eq!(lines[1], "nuran-bank  Nuran Bank  (bank)  [1 screenshots]");
    }

    #[test]
    fn test_render_listing_empty() {
        let catalog = Catalog::from_str(CATALOG).unwrap();
        let found = catalog.search("zzz", None);
        assert_eq!(render_listing(&catalog, &found), "no matching assets\n");
    }
}
