//! Logokit - logo catalog toolkit.
//!
//! Generates icon component source from logo SVGs, exports logos as
//! SVG/PNG/WebP, and bundles app screenshots into ZIP archives.

#![allow(dead_code)]

mod catalog;
mod cli;
mod config;
mod export;
mod logger;
mod svg;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::LogokitConfig;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = LogokitConfig::load(&cli)?;
    debug!("config"; "root {}", config.get_root().display());

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    rt.block_on(cli::dispatch(&cli, &config))
}
