//! # Run Viewer
//!
//! Look up recorded quest runs by completion time.
//!
//! Given a time such as `01:15.500`, the viewer searches the overlay's run
//! database for runs with exactly that time. When none match it can widen
//! the search to nearby times, three seconds further each attempt. Matching
//! runs are listed, and the user picks which ones to view in full.
//!
//! ## Quick Start
//!
//! ```ignore
//! use runviewer::prelude::*;
//!
//! // Finds the single *.sqlite file in the directory
//! let viewer = RunViewer::open(".")?;
//! viewer.run(&mut prompt, &mut presenter)?;
//! viewer.close()?;
//! ```
//!
//! ## Crates
//!
//! - `runviewer-core` - time codec, run model, collaborator traits, config
//! - `runviewer-storage` - SQLite and in-memory record stores
//! - `runviewer-engine` - search controller, disambiguator, session loop

#![warn(missing_docs)]

mod viewer;

pub mod prelude;

// Re-export main entry points
pub use viewer::{RunViewer, RunViewerBuilder};

// Re-export the layers
pub use runviewer_core::{
    time, Catalog, Error, LookupConfig, Presenter, Prompt, RecordStore, Result, RunDetail, RunId,
    RunQuery, RunSummary,
};
pub use runviewer_engine::{SearchSession, SessionEnd, SessionLoop};
pub use runviewer_storage::{MemoryRecordStore, SqliteRecordStore};
