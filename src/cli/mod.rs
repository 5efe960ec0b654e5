//! Command-line interface module.

mod args;
mod bundle;
mod code;
mod common;
mod export;
mod list;

pub use args::{Cli, CodeArgs, Commands};

use anyhow::Result;
use std::process::ExitCode;

use crate::config::LogokitConfig;

/// Run the selected subcommand to completion.
pub async fn dispatch(cli: &Cli, config: &LogokitConfig) -> Result<ExitCode> {
    match &cli.command {
        Commands::List { query, kind } => list::run_list(config, query.as_deref(), *kind),
        Commands::Code { args } => code::run_code(config, args).await,
        Commands::Export {
            asset,
            format,
            variant,
        } => export::run_export(config, asset, *format, variant.clone()).await,
        Commands::Bundle { asset } => bundle::run_bundle(config, asset).await,
        Commands::Shot { asset, screenshot } => bundle::run_shot(config, asset, screenshot).await,
    }
}
