//! Output-directory lifecycle: reset and staged publish.
//!
//! Profiles are first written into a staging directory created next to the
//! output directory, and only once the whole set is on disk is the output
//! directory cleared and the staged files renamed in. A failure anywhere
//! before the swap leaves the previous profile set untouched.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::profile::ProfileFile;

/// Prefix for staging directories (dot-prefixed so WireGuard tooling that
/// globs `*.conf` in neighboring directories never sees them).
const STAGING_PREFIX: &str = ".mwg-staging-";

/// Ensure `dir` exists and contains no regular files.
///
/// Subdirectories are kept, only the files inside them are removed. A failed
/// delete aborts mid-walk; the directory may then be partially cleaned.
pub fn reset(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    remove_files_in(dir)
}

fn remove_files_in(dir: &Path) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", path.display()))?;
        if file_type.is_dir() {
            remove_files_in(&path)?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }
    }
    Ok(())
}

/// Replace the contents of `dir` with `files`.
///
/// The swap itself is not transactional: a rename failure can leave a mix of
/// old-empty and new files. Everything up to the swap is side-effect free
/// (beyond creating `dir` itself).
pub fn publish(dir: &Path, files: &[ProfileFile]) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    // Staging lives next to the output directory so the final renames stay
    // on one filesystem.
    let staging_parent = dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(staging_parent)
        .with_context(|| format!("failed to create staging directory in {}", staging_parent.display()))?;

    for file in files {
        let path = staging.path().join(&file.filename);
        fs::write(&path, &file.body)
            .with_context(|| format!("failed to stage {}", path.display()))?;
    }

    remove_files_in(dir)?;

    for file in files {
        let from = staging.path().join(&file.filename);
        let to = dir.join(&file.filename);
        fs::rename(&from, &to)
            .with_context(|| format!("failed to install {}", to.display()))?;
    }

    tracing::debug!(count = files.len(), dir = %dir.display(), "published profiles");
    Ok(())
}
