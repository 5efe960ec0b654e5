//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::AssetKind;
use crate::export::ExportFormat;

/// Logo catalog toolkit: icon components, logo exports, screenshot bundles
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: logokit.toml)
    #[arg(short = 'C', long, global = true, default_value = "logokit.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Catalog JSON path (relative to project root)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// Download directory (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Edge length of PNG/WebP exports in pixels
    #[arg(long, global = true)]
    pub size: Option<u32>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search the catalog by name
    #[command(visible_alias = "l")]
    List {
        /// Case-insensitive name filter; omit to list everything
        query: Option<String>,

        /// Only show assets of this kind
        #[arg(short, long)]
        kind: Option<AssetKind>,
    },

    /// Print icon component source for an asset's logo
    #[command(visible_alias = "c")]
    Code {
        #[command(flatten)]
        args: CodeArgs,
    },

    /// Save an asset's logo as svg, png or webp
    #[command(visible_alias = "e")]
    Export {
        /// Asset id from the catalog
        asset: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::SVG, ignore_case = true)]
        format: ExportFormat,

        /// Variant name appended to the file name
        #[arg(long)]
        variant: Option<String>,
    },

    /// Bundle every screenshot of an asset into one zip
    #[command(visible_alias = "b")]
    Bundle {
        /// Asset id from the catalog
        asset: String,
    },

    /// Download a single screenshot of an asset
    #[command(visible_alias = "s")]
    Shot {
        /// Asset id from the catalog
        asset: String,

        /// Screenshot id
        screenshot: String,
    },
}

/// Code command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CodeArgs {
    /// Asset id from the catalog (component name when --svg is given)
    pub asset: String,

    /// Template: react, vue, svelte, html or svg. Unknown values print plain svg
    #[arg(short, long, default_value = "react")]
    pub format: String,

    /// Read markup from this file instead of the asset's logo
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub svg: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["logokit"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["export", "visa", "--size", "256", "-o", "out", "-v"]);
        assert_eq!(cli.size, Some(256));
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("logokit.toml"));
    }

    #[test]
    fn test_export_format_parsing() {
        let cli = parse(&["export", "visa", "--format", "PNG", "--variant", "Dark"]);
        match cli.command {
            Commands::Export {
                asset,
                format,
                variant,
            } => {
                assert_eq!(asset, "visa");
                assert_eq!(format, ExportFormat::PNG);
                assert_eq!(variant.as_deref(), Some("Dark"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_export_defaults_to_svg() {
        let cli = parse(&["e", "visa"]);
        assert!(matches!(
            cli.command,
            Commands::Export {
                format: ExportFormat::SVG,
                ..
            }
        ));
    }

    #[test]
    fn test_code_accepts_any_token() {
        let cli = parse(&["code", "visa", "-f", "Angular", "--svg", "logo.svg"]);
        match cli.command {
            Commands::Code { args } => {
                assert_eq!(args.format, "Angular");
                assert_eq!(args.svg, Some(PathBuf::from("logo.svg")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_kind_filter() {
        let cli = parse(&["list", "bank", "--kind", "payment-method"]);
        match cli.command {
            Commands::List { query, kind } => {
                assert_eq!(query.as_deref(), Some("bank"));
                assert_eq!(kind, Some(AssetKind::PaymentMethod));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_shot_requires_screenshot_id() {
        assert!(Cli::try_parse_from(["logokit", "shot", "visa"]).is_err());
        let cli = parse(&["shot", "visa", "visa-login"]);
        assert!(matches!(cli.command, Commands::Shot { .. }));
    }
}
