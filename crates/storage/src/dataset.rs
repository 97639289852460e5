//! Dataset discovery
//!
//! The viewer is dropped next to the overlay's database and opens it without
//! being told its name. Exactly one file with the configured extension must be
//! present: none is [`Error::NoDatasetFound`], several is
//! [`Error::AmbiguousDataset`] rather than an arbitrary pick.

use std::path::{Path, PathBuf};

use runviewer_core::{Error, Result};
use tracing::debug;

/// Locate the single `*.{extension}` file directly inside `dir`.
pub fn locate_dataset(dir: &Path, extension: &str) -> Result<PathBuf> {
    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            candidates.push(path);
        }
    }
    candidates.sort();
    debug!(
        "Found {} dataset candidate(s) in {}",
        candidates.len(),
        dir.display()
    );

    match candidates.len() {
        0 => Err(Error::NoDatasetFound {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(Error::AmbiguousDataset { candidates }),
    }
}
