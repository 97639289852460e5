//! Core types for the run viewer
//!
//! This crate holds everything the lookup loop shares with its collaborators:
//! - [`time`]: `mm:ss.fff` ↔ frame count codec
//! - [`types`]: run identifiers, queries, summaries and details
//! - [`contract`]: the [`RecordStore`], [`Presenter`] and [`Prompt`] traits
//! - [`catalog`]: weapon type names
//! - [`config`]: window sizes and dataset selection
//! - [`error`]: the shared [`Error`] type

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod contract;
pub mod error;
pub mod time;
pub mod types;

pub use catalog::Catalog;
pub use config::LookupConfig;
pub use contract::{Presenter, Prompt, RecordStore, Validator};
pub use error::{Error, Result};
pub use types::{RunDetail, RunId, RunQuery, RunSummary};
