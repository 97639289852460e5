//! Dataset and configuration discovery at startup.

use std::fs;

use runviewer::{Error, RunViewer};

use crate::*;

#[test]
fn missing_dataset_is_startup_failure() {
    let dir = TempDir::new().unwrap();
    let err = RunViewer::open(dir.path()).err().unwrap();
    assert!(matches!(err, Error::NoDatasetFound { .. }));
    assert!(err.is_startup_failure());
}

#[test]
fn two_datasets_are_ambiguous() {
    let dir = dataset_dir(&standard_runs());
    write_dataset(&dir.path().join("backup.sqlite"), &standard_runs()).unwrap();

    let err = RunViewer::open(dir.path()).err().unwrap();
    match err {
        Error::AmbiguousDataset { candidates } => assert_eq!(candidates.len(), 2),
        other => panic!("Expected AmbiguousDataset, got {:?}", other),
    }
}

#[test]
fn explicit_dataset_skips_discovery() {
    let dir = dataset_dir(&standard_runs());
    write_dataset(&dir.path().join("backup.sqlite"), &standard_runs()).unwrap();

    let viewer = RunViewer::builder()
        .dir(dir.path())
        .dataset(dir.path().join("backup.sqlite"))
        .open()
        .unwrap();
    assert!(viewer.dataset_path().ends_with("backup.sqlite"));
}

#[test]
fn config_file_is_applied() {
    let dir = dataset_dir(&standard_runs());
    fs::write(
        dir.path().join("runviewer.toml"),
        "base_window_radius = 30\nwindow_radius_step = 15\n",
    )
    .unwrap();

    let viewer = open_in(dir.path());
    assert_eq!(viewer.config().base_window_radius, 30);
    assert_eq!(viewer.config().window_radius_step, 15);
}

#[test]
fn invalid_config_file_fails() {
    let dir = dataset_dir(&standard_runs());
    fs::write(dir.path().join("runviewer.toml"), "window_radius_step = 0\n").unwrap();

    let err = RunViewer::open(dir.path()).err().unwrap();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn non_database_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("runs.sqlite"), b"not a database").unwrap();

    let err = RunViewer::open(dir.path()).err().unwrap();
    assert!(matches!(err, Error::StoreUnavailable(_)));
}
