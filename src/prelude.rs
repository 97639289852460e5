//! Convenient imports for the run viewer.
//!
//! ```ignore
//! use runviewer::prelude::*;
//!
//! let viewer = RunViewer::open(".")?;
//! ```

// Main entry point
pub use crate::viewer::{RunViewer, RunViewerBuilder};

// Error handling
pub use runviewer_core::{Error, Result};

// Collaborators
pub use runviewer_core::{Presenter, Prompt, RecordStore};

// Core types
pub use runviewer_core::{LookupConfig, RunDetail, RunId, RunSummary};

// Session results
pub use runviewer_engine::SessionEnd;
