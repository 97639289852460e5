//! Run model types
//!
//! - [`RunId`]: identifier of a recorded run
//! - [`RunQuery`]: what a search step asked the store for
//! - [`RunSummary`]: one row of a search result table
//! - [`RunDetail`]: full metadata for a single run

use serde::{Deserialize, Serialize};

/// Identifier of a recorded run (the dataset's `RunID` column).
pub type RunId = u64;

/// A single lookup issued to the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunQuery {
    /// Exact match on the displayed completion time
    RawTime(String),
    /// Inclusive range over the stored frame count
    FrameWindow {
        /// Lower bound, never below zero
        min: u64,
        /// Upper bound
        max: u64,
    },
}

impl RunQuery {
    /// Build a frame window, normalising the bounds so `min <= max`.
    pub fn window(min: u64, max: u64) -> Self {
        if min <= max {
            RunQuery::FrameWindow { min, max }
        } else {
            RunQuery::FrameWindow { min: max, max: min }
        }
    }

    /// Whether this is the widened fallback query.
    pub fn is_window(&self) -> bool {
        matches!(self, RunQuery::FrameWindow { .. })
    }
}

/// Lightweight projection of a matched run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Run identifier
    pub run_id: RunId,
    /// Completion time as displayed in game (`mm:ss.fff`)
    pub time: String,
    /// Date the run was recorded (`YYYY-MM-DD`, or `????-??-??`)
    pub date: String,
    /// Quest objective
    pub objective: String,
    /// Overlay category
    pub category: String,
    /// Quest identifier
    pub quest_id: u64,
    /// Weapon label
    pub weapon: String,
    /// Number of hunters in the party
    pub party_size: u32,
}

/// Full metadata of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDetail {
    /// The displayed projection
    pub summary: RunSummary,
    /// Stored completion time in frames
    pub final_time_frames: u64,
    /// Raw weapon type code
    pub weapon_type_id: u32,
    /// Raw creation timestamp as stored
    pub created_at: String,
}

impl RunDetail {
    /// Run identifier.
    pub fn run_id(&self) -> RunId {
        self.summary.run_id
    }
}
