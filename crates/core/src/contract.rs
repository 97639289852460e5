//! Collaborator contracts
//!
//! The lookup loop never touches storage, stdout or stdin directly. It works
//! against three traits:
//!
//! | Trait | Role |
//! |-------|------|
//! | [`RecordStore`] | Read-only queries over recorded runs |
//! | [`Presenter`] | Renders tables, details and messages |
//! | [`Prompt`] | All user input |
//!
//! Substituting fakes for [`Prompt`] and [`Presenter`] makes a whole session
//! scriptable in tests.

use crate::error::Result;
use crate::types::{RunDetail, RunId, RunSummary};

/// Read-only access to recorded runs.
///
/// Implementations must be shareable across threads: detail fetches for
/// several identifiers are issued concurrently.
pub trait RecordStore: Send + Sync {
    /// Runs whose displayed time equals `time` exactly.
    fn find_by_exact_time(&self, time: &str) -> Result<Vec<RunSummary>>;

    /// Runs whose stored frame count lies in `[min, max]`.
    fn find_by_frame_range(&self, min: u64, max: u64) -> Result<Vec<RunSummary>>;

    /// Full metadata for one run, or [`Error::NotFound`](crate::Error::NotFound).
    fn fetch_detail(&self, id: RunId) -> Result<RunDetail>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn find_by_exact_time(&self, time: &str) -> Result<Vec<RunSummary>> {
        (**self).find_by_exact_time(time)
    }

    fn find_by_frame_range(&self, min: u64, max: u64) -> Result<Vec<RunSummary>> {
        (**self).find_by_frame_range(min, max)
    }

    fn fetch_detail(&self, id: RunId) -> Result<RunDetail> {
        (**self).fetch_detail(id)
    }
}

/// Output side of the session.
pub trait Presenter {
    /// Show the runs matched by a search step.
    fn render_summary_table(&mut self, runs: &[RunSummary]);

    /// Show one run in full.
    fn render_detail(&mut self, detail: &RunDetail);

    /// Show a status line.
    fn render_message(&mut self, text: &str);
}

/// Validates free-text answers; `Err` carries the message shown before re-asking.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<()>;

/// Input side of the session.
pub trait Prompt {
    /// Ask for free text, re-asking until `validator` accepts the answer.
    ///
    /// Returns [`Error::Interrupted`](crate::Error::Interrupted) when the user
    /// closes the input.
    fn ask_text(&mut self, message: &str, validator: Validator<'_>) -> Result<String>;

    /// Ask the user to pick one of `options`; returns the chosen label.
    fn ask_choice(&mut self, message: &str, options: &[&str]) -> Result<String>;
}
