//! Bootstrap file store.
//!
//! Stages the seed device file into the working directory before first
//! load, overwriting any working copy left by a previous session.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("source file not found: {0}")]
    SourceMissing(PathBuf),

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Copy `source_dir/filename` over `working_dir/filename`, returning the
/// working path.
///
/// A missing source is reported as `SourceMissing` rather than an io error
/// so the caller can continue startup; the subsequent load then fails on
/// the absent working file.
pub fn stage(
    source_dir: &Path,
    filename: &str,
    working_dir: &Path,
) -> Result<PathBuf, StoreError> {
    let from = source_dir.join(filename);
    let to = working_dir.join(filename);

    if !from.exists() {
        return Err(StoreError::SourceMissing(from));
    }

    fs::copy(&from, &to).map_err(|e| StoreError::Copy {
        from: from.clone(),
        to: to.clone(),
        source: e,
    })?;

    debug!("staged {} -> {}", from.display(), to.display());
    Ok(to)
}
