//! Storage layer for the run viewer
//!
//! This crate implements the [`RecordStore`](runviewer_core::RecordStore)
//! backends:
//! - SqliteRecordStore: read-only access to the overlay database
//! - MemoryRecordStore: vector-backed store for tests and demos
//! - Dataset discovery in the working directory
//! - Fixture writers that create databases in the overlay's schema

#![warn(clippy::all)]

pub mod dataset;
pub mod fixture;
pub mod memory;
pub mod record;
pub mod sqlite;

pub use dataset::locate_dataset;
pub use memory::MemoryRecordStore;
pub use record::{format_date, RunRecord, UNKNOWN_DATE};
pub use sqlite::SqliteRecordStore;
