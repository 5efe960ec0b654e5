//! `logokit code`: print an icon component for an asset's logo.

use anyhow::{Context, Result};
use std::process::ExitCode;

use super::CodeArgs;
use super::common::{fetcher, load_catalog};
use crate::config::LogokitConfig;
use crate::svg::{TemplateKind, generate, load_svg, sanitize_name};
use crate::{debug, log};

pub async fn run_code(config: &LogokitConfig, args: &CodeArgs) -> Result<ExitCode> {
    let kind = template_kind(&args.format);

    let (markup, name) = match &args.svg {
        Some(path) => {
            let markup = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (markup, args.asset.clone())
        }
        None => {
            let catalog = load_catalog(config)?;
            let asset = catalog.asset(&args.asset)?;
            let markup = load_svg(asset, &fetcher(config)?).await;
            (markup, asset.name.clone())
        }
    };

    let name = component_name(&name, &config.codegen.component);
    debug!("code"; "{} component `{}`", kind.label(), sanitize_name(name));
    println!("{}", generate(kind, &markup, name));
    Ok(ExitCode::SUCCESS)
}

/// Resolve a format token, warning when it falls back to plain markup.
fn template_kind(token: &str) -> TemplateKind {
    TemplateKind::parse_token(token).unwrap_or_else(|| {
        let known: Vec<_> = TemplateKind::ALL.iter().map(|k| k.label()).collect();
        log!("warning"; "unknown format `{}`, printing svg markup (known: {})", token, known.join(", "));
        TemplateKind::Markup
    })
}

/// Names that sanitize to nothing use the configured fallback.
fn component_name<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if sanitize_name(name).is_empty() {
        fallback
    } else {
        name
    }
}
