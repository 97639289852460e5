//! Session Integration Test Suite
//!
//! Drives whole lookup sessions through [`RunViewer`] against SQLite
//! datasets written to temporary directories, using a scripted prompt and a
//! recording presenter.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test session
//! cargo test --test session end_to_end::
//! ```

use std::path::Path;

use runviewer::RunViewer;
use runviewer_storage::fixture::write_dataset;
use runviewer_storage::RunRecord;
use tempfile::TempDir;

// Test modules
mod discovery;
mod end_to_end;
mod window;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Runs used across the suite. Times in frames:
/// 01:12.000 = 2160, 01:15.000 = 2250, 01:18.000 = 2340, 01:30.000 = 2700.
pub fn standard_runs() -> Vec<RunRecord> {
    vec![
        RunRecord::new(101, "01:12.000")
            .unwrap()
            .quest(23_604)
            .objective("Blue Taikun Zamuza")
            .category("Speedrun")
            .created_at("2023-02-04 10:00:00")
            .weapon(7),
        RunRecord::new(102, "01:18.000")
            .unwrap()
            .quest(23_604)
            .objective("Blue Taikun Zamuza")
            .category("Speedrun")
            .party_size(2)
            .created_at("2023-03-01T21:15:00")
            .weapon(11),
        RunRecord::new(103, "01:30.000")
            .unwrap()
            .quest(23_605)
            .objective("Zenith Gravios")
            .category("Standard")
            .weapon(2),
        RunRecord::new(104, "01:30.000")
            .unwrap()
            .quest(23_605)
            .objective("Zenith Gravios")
            .category("Standard")
            .party_size(4)
            .weapon(13),
    ]
}

/// Write `records` to `runs.sqlite` in a fresh temp dir.
pub fn dataset_dir(records: &[RunRecord]) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir.path().join("runs.sqlite"), records).unwrap();
    dir
}

/// Open a viewer over the standard runs.
pub fn open_standard() -> (TempDir, RunViewer) {
    let dir = dataset_dir(&standard_runs());
    let viewer = open_in(dir.path());
    (dir, viewer)
}

pub fn open_in(dir: &Path) -> RunViewer {
    RunViewer::open(dir).expect("Failed to open test dataset")
}
