//! Search controller
//!
//! Finds the runs recorded at a given completion time, widening the search
//! when nothing matches exactly.
//!
//! ## Phases
//!
//! ```text
//!  ExactSearch ──match──────────────────────────▶ Resolved
//!       │ no match                                  ▲
//!       ▼                                           │
//!  WindowedSearch ──"search", match────────────────┘
//!       │  ▲
//!       └──┘ "search", no match: radius += step
//! ```
//!
//! Both non-resolved phases may be left through "Restart" or "Exit"; the
//! session loop acts on those.

use runviewer_core::{time, Error, Presenter, Prompt, RecordStore, Result, RunQuery, RunSummary};
use tracing::debug;

use crate::state::{SearchPhase, SearchSession};

pub const RUN_FOUND: &str = "Found a run!";
pub const RUNS_FOUND: &str = "Found multiple runs!";
pub const NO_RUN_FOUND: &str = "No runs have been found.";
pub const ACTION_PROMPT: &str = "Select an action:";

/// Choices offered while nothing has matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundAction {
    Search,
    Restart,
    Exit,
}

impl NotFoundAction {
    pub const ALL: [NotFoundAction; 3] = [
        NotFoundAction::Search,
        NotFoundAction::Restart,
        NotFoundAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotFoundAction::Search => "Search for similar times",
            NotFoundAction::Restart => "Restart",
            NotFoundAction::Exit => "Exit",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.label()).collect()
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The session's selection holds at least one run
    Resolved,
    /// The user asked to start over
    Restart,
    /// The user asked to quit
    Exit,
}

/// Drives the exact/windowed search state machine against a record store.
pub struct SearchController<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> SearchController<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Run the search for the session's target until resolved, restart or exit.
    ///
    /// The session must have been started with [`SearchSession::begin`].
    pub fn run(
        &self,
        session: &mut SearchSession,
        presenter: &mut dyn Presenter,
        prompt: &mut dyn Prompt,
    ) -> Result<SearchOutcome> {
        let mut phase = self.exact_search(session, presenter)?;
        let labels = NotFoundAction::labels();

        while phase != SearchPhase::Resolved {
            let choice = prompt.ask_choice(ACTION_PROMPT, &labels)?;
            match NotFoundAction::from_label(&choice) {
                Some(NotFoundAction::Search) => phase = self.widen(session, presenter)?,
                Some(NotFoundAction::Restart) => return Ok(SearchOutcome::Restart),
                Some(NotFoundAction::Exit) => return Ok(SearchOutcome::Exit),
                None => presenter.render_message(&format!("Unknown action: {}", choice)),
            }
        }
        Ok(SearchOutcome::Resolved)
    }

    /// Query the exact displayed time.
    pub fn exact_search(
        &self,
        session: &mut SearchSession,
        presenter: &mut dyn Presenter,
    ) -> Result<SearchPhase> {
        let text = session
            .target
            .as_ref()
            .map(|t| t.text.clone())
            .ok_or_else(|| Error::QueryFailure("no time to search for".into()))?;

        session.selection.clear();
        session.state.last_query = Some(RunQuery::RawTime(text.clone()));
        session.searches += 1;
        let runs = self.store.find_by_exact_time(&text)?;
        debug!("Exact search for {} returned {} run(s)", text, runs.len());

        if runs.is_empty() {
            presenter.render_message(NO_RUN_FOUND);
            session.phase = SearchPhase::WindowedSearch;
        } else {
            resolve(session, presenter, runs);
        }
        Ok(session.phase)
    }

    /// Query a window of `radius` frames either side of the target.
    ///
    /// On an empty result the current range is echoed and the radius grows
    /// by one step for the next attempt.
    pub fn widen(
        &self,
        session: &mut SearchSession,
        presenter: &mut dyn Presenter,
    ) -> Result<SearchPhase> {
        let target = session
            .target
            .as_ref()
            .map(|t| t.frames)
            .ok_or_else(|| Error::QueryFailure("no time to search for".into()))?;

        let radius = session.state.window_radius;
        let min = target.saturating_sub(radius);
        let max = target.saturating_add(radius);
        session.state.min_frame = Some(min);
        session.state.max_frame = Some(max);
        session.state.last_query = Some(RunQuery::window(min, max));
        session.phase = SearchPhase::WindowedSearch;

        session.selection.clear();
        session.searches += 1;
        let runs = self.store.find_by_frame_range(min, max)?;
        debug!(
            "Window search radius {} [{}, {}] returned {} run(s)",
            radius,
            min,
            max,
            runs.len()
        );

        if runs.is_empty() {
            presenter.render_message(NO_RUN_FOUND);
            presenter.render_message(&format!(
                "Current time search range: {} to {}",
                time::decode(min),
                time::decode(max)
            ));
            session.grow_window();
        } else {
            resolve(session, presenter, runs);
        }
        Ok(session.phase)
    }
}

fn resolve(session: &mut SearchSession, presenter: &mut dyn Presenter, runs: Vec<RunSummary>) {
    presenter.render_summary_table(&runs);
    presenter.render_message(if runs.len() == 1 { RUN_FOUND } else { RUNS_FOUND });
    session.selection = runs;
    session.phase = SearchPhase::Resolved;
}
