//! Lookup engine for the run viewer
//!
//! Implements the interactive search-and-disambiguation loop on top of the
//! collaborator traits in `runviewer-core`:
//! - [`SearchController`]: exact search, then widening frame windows
//! - [`Disambiguator`]: pick runs from several matches and show them in full
//! - [`SessionLoop`]: prompt → search → display → restart/exit
//! - [`SearchSession`]: the state those three share
//!
//! The [`scripted`] module provides a canned-answer prompt and a recording
//! presenter for running sessions in tests.

pub mod disambiguate;
pub mod scripted;
pub mod search;
pub mod session;
pub mod state;

pub use disambiguate::{parse_selection, DisambiguationReport, Disambiguator};
pub use search::{NotFoundAction, SearchController, SearchOutcome};
pub use session::{PostDisplayAction, SessionEnd, SessionLoop};
pub use state::{SearchPhase, SearchSession, SearchState, SearchTarget, SelectionSet};
