//! One full generation run: fetch → filter → render → publish.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::MwgConfig;
use crate::fetch;
use crate::filter;
use crate::outdir;
use crate::profile::{self, ProfileFile};
use crate::relay::Relay;

/// Where the generated profiles land.
pub const DEFAULT_OUTPUT_DIR: &str = "/etc/wireguard/mullvad";

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunSummary {
    /// Profiles written to the output directory.
    pub written: usize,
    /// Qualifying relays skipped because a required field was absent.
    pub skipped: usize,
    pub output_dir: PathBuf,
}

/// Fetch the directory, render a profile per qualifying relay, and replace
/// the contents of `output_dir` with the result.
///
/// The output directory is only touched after the whole relay set has been
/// fetched and rendered, so a failed run preserves the previous profiles.
pub fn run(cfg: &MwgConfig, endpoint: &str, output_dir: &Path) -> Result<RunSummary> {
    let relays = fetch::fetch_relays(endpoint)
        .with_context(|| format!("failed to fetch relay directory from {endpoint}"))?;
    tracing::info!(total = relays.len(), "fetched relay directory");

    let (files, skipped) = build_profiles(&relays, cfg);

    outdir::publish(output_dir, &files)?;

    Ok(RunSummary {
        written: files.len(),
        skipped,
        output_dir: output_dir.to_path_buf(),
    })
}

/// Render every qualifying relay. Relays with missing fields are skipped and
/// counted; filename collisions keep the later relay.
fn build_profiles(relays: &[Relay], cfg: &MwgConfig) -> (Vec<ProfileFile>, usize) {
    let mut files: Vec<ProfileFile> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut skipped = 0usize;

    for relay in relays.iter().filter(|r| filter::qualifies(r)) {
        match profile::build(relay, cfg) {
            Ok(file) => {
                if !seen.insert(file.filename.clone()) {
                    tracing::warn!(
                        filename = %file.filename,
                        "filename collision, keeping the later relay"
                    );
                    files.retain(|f| f.filename != file.filename);
                }
                files.push(file);
            }
            Err(err) => {
                skipped += 1;
                tracing::warn!(hostname = ?relay.hostname, %err, "skipping relay");
            }
        }
    }

    (files, skipped)
}
