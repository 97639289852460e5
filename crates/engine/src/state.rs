//! Per-session search state
//!
//! Everything the lookup loop remembers between prompts lives in a
//! [`SearchSession`], owned by the session loop and lent to the search
//! controller and disambiguator.
//!
//! ## Invariants
//!
//! - `window_radius` starts at the configured base and only grows, one step
//!   per empty windowed search, until restart
//! - `min_frame`/`max_frame` are `None` until the first windowed search
//! - the selection is emptied when a new search begins and on restart

use runviewer_core::{LookupConfig, RunQuery, RunSummary};

/// Runs matched by the latest successful search, in store order.
pub type SelectionSet = Vec<RunSummary>;

/// Where the search state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Looking for the exact displayed time
    ExactSearch,
    /// Exact search failed; widening a frame window around the target
    WindowedSearch,
    /// At least one run matched
    Resolved,
}

/// Window bookkeeping for the fallback search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Half-width of the next window, in frames
    pub window_radius: u64,
    /// Lower bound of the last window searched
    pub min_frame: Option<u64>,
    /// Upper bound of the last window searched
    pub max_frame: Option<u64>,
    /// The last query sent to the store
    pub last_query: Option<RunQuery>,
}

impl SearchState {
    /// Fresh state with the base radius.
    pub fn new(base_radius: u64) -> Self {
        Self {
            window_radius: base_radius,
            min_frame: None,
            max_frame: None,
            last_query: None,
        }
    }
}

/// The time being looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTarget {
    /// As typed by the user
    pub text: String,
    /// Encoded frame count
    pub frames: u64,
}

/// State of one interactive lookup session.
#[derive(Debug, Clone)]
pub struct SearchSession {
    config: LookupConfig,
    pub(crate) phase: SearchPhase,
    pub(crate) target: Option<SearchTarget>,
    pub(crate) state: SearchState,
    pub(crate) selection: SelectionSet,
    pub(crate) searches: usize,
    pub(crate) restarts: usize,
}

impl SearchSession {
    /// An idle session awaiting its first time.
    pub fn new(config: LookupConfig) -> Self {
        let state = SearchState::new(config.base_window_radius);
        Self {
            config,
            phase: SearchPhase::ExactSearch,
            target: None,
            state,
            selection: Vec::new(),
            searches: 0,
            restarts: 0,
        }
    }

    /// Start looking up a new time; window and selection start over.
    pub fn begin(&mut self, text: impl Into<String>, frames: u64) {
        self.reset();
        self.target = Some(SearchTarget {
            text: text.into(),
            frames,
        });
    }

    /// Return to the initial state, keeping counters.
    pub fn reset(&mut self) {
        self.phase = SearchPhase::ExactSearch;
        self.target = None;
        self.state = SearchState::new(self.config.base_window_radius);
        self.selection.clear();
    }

    /// Reset for a user-requested restart.
    pub fn restart(&mut self) {
        self.reset();
        self.restarts += 1;
    }

    /// Grow the window by one step, stopping at the configured cap.
    pub(crate) fn grow_window(&mut self) {
        let grown = self
            .state
            .window_radius
            .saturating_add(self.config.window_radius_step);
        self.state.window_radius = match self.config.max_window_radius {
            Some(cap) => grown.min(cap),
            None => grown,
        };
    }

    /// Settings the session was created with.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Current search phase.
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// The time being looked up, if one has been entered.
    pub fn target(&self) -> Option<&SearchTarget> {
        self.target.as_ref()
    }

    /// Window bookkeeping.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Runs matched by the latest successful search.
    pub fn selection(&self) -> &[RunSummary] {
        &self.selection
    }

    /// Store queries issued so far (exact and windowed).
    pub fn searches(&self) -> usize {
        self.searches
    }

    /// User-requested restarts so far.
    pub fn restarts(&self) -> usize {
        self.restarts
    }
}
