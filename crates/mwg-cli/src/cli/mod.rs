//! CLI for the MWG profile generator.

use anyhow::Result;
use clap::Parser;
use mwg_core::config;
use mwg_core::fetch::RELAY_ENDPOINT;
use mwg_core::pipeline::{self, DEFAULT_OUTPUT_DIR};
use std::path::Path;

/// Top-level CLI. The generator takes no arguments or flags; every
/// invocation runs the full fetch → render → publish pipeline against the
/// fixed endpoint and output directory.
#[derive(Debug, Parser)]
#[command(name = "mwg")]
#[command(about = "MWG: Mullvad WireGuard connection-profile generator", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config for interface address {}", cfg.address);

        let summary = pipeline::run(&cfg, RELAY_ENDPOINT, Path::new(DEFAULT_OUTPUT_DIR))?;

        println!(
            "Saved {} connection profiles to {}",
            summary.written,
            summary.output_dir.display()
        );
        Ok(())
    }
}
