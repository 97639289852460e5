//! Session loop
//!
//! Top-level driver of an interactive lookup:
//!
//! 1. ask for a time (`mm:ss.fff`)
//! 2. search, widening on request, until resolved, restart or exit
//! 3. show the matched runs through the disambiguator
//! 4. offer {View another run, Restart, Exit}
//!
//! "View another run" asks for run IDs again, even after a single match,
//! without a new search. "Restart" starts over at step 1 with fresh state. The loop ends on
//! "Exit" or when the prompt is closed. A failed query is reported and the
//! loop returns to step 1.

use runviewer_core::{time, Error, LookupConfig, Presenter, Prompt, RecordStore, Result};
use tracing::{debug, info, warn};

use crate::disambiguate::Disambiguator;
use crate::search::{SearchController, SearchOutcome, ACTION_PROMPT};
use crate::state::SearchSession;

pub const TIME_PROMPT: &str = "Enter minutes, seconds and milliseconds of the run (mm:ss.fff)";
pub const RESTARTING: &str = "Restarting...";

/// Choices offered after runs have been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostDisplayAction {
    ViewAnother,
    Restart,
    Exit,
}

impl PostDisplayAction {
    pub const ALL: [PostDisplayAction; 3] = [
        PostDisplayAction::ViewAnother,
        PostDisplayAction::Restart,
        PostDisplayAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PostDisplayAction::ViewAnother => "View another run",
            PostDisplayAction::Restart => "Restart",
            PostDisplayAction::Exit => "Exit",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.label()).collect()
    }
}

/// Counters describing a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionEnd {
    /// Store queries issued by searches
    pub searches: usize,
    /// User-requested restarts
    pub restarts: usize,
}

/// What to do after a step of the loop.
enum Next {
    NewTime,
    Exit,
}

/// Drives whole lookup sessions against one record store.
pub struct SessionLoop<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    config: LookupConfig,
}

impl<'a, S: RecordStore + ?Sized> SessionLoop<'a, S> {
    pub fn new(store: &'a S, config: LookupConfig) -> Self {
        Self { store, config }
    }

    /// Run a session from a fresh state until the user exits.
    pub fn run(&self, prompt: &mut dyn Prompt, presenter: &mut dyn Presenter) -> Result<SessionEnd> {
        let mut session = SearchSession::new(self.config.clone());
        self.run_with(&mut session, prompt, presenter)
    }

    /// Run a session over caller-owned state, left in place for inspection.
    pub fn run_with(
        &self,
        session: &mut SearchSession,
        prompt: &mut dyn Prompt,
        presenter: &mut dyn Presenter,
    ) -> Result<SessionEnd> {
        loop {
            match self.lookup_once(session, prompt, presenter) {
                Ok(Next::NewTime) => continue,
                Ok(Next::Exit) | Err(Error::Interrupted) => break,
                Err(e) if e.is_recoverable() => {
                    warn!("Lookup failed: {}", e);
                    presenter.render_message(&e.to_string());
                    session.reset();
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Session ended after {} search(es), {} restart(s)",
            session.searches(),
            session.restarts()
        );
        Ok(SessionEnd {
            searches: session.searches(),
            restarts: session.restarts(),
        })
    }

    fn lookup_once(
        &self,
        session: &mut SearchSession,
        prompt: &mut dyn Prompt,
        presenter: &mut dyn Presenter,
    ) -> Result<Next> {
        let text = prompt.ask_text(TIME_PROMPT, &time::validate)?;
        let frames = time::encode(&text)?;
        debug!("Looking up {} ({} frames)", text, frames);
        session.begin(text, frames);

        match SearchController::new(self.store).run(session, presenter, prompt)? {
            SearchOutcome::Resolved => {}
            SearchOutcome::Restart => return Ok(self.restart(session, presenter)),
            SearchOutcome::Exit => return Ok(Next::Exit),
        }

        let disambiguator = Disambiguator::new(self.store);
        let labels = PostDisplayAction::labels();
        disambiguator.disambiguate(session.selection(), presenter, prompt)?;
        loop {
            let action = loop {
                let choice = prompt.ask_choice(ACTION_PROMPT, &labels)?;
                match PostDisplayAction::from_label(&choice) {
                    Some(action) => break action,
                    None => presenter.render_message(&format!("Unknown action: {}", choice)),
                }
            };
            match action {
                PostDisplayAction::ViewAnother => {
                    disambiguator.prompt_and_show(presenter, prompt)?;
                }
                PostDisplayAction::Restart => return Ok(self.restart(session, presenter)),
                PostDisplayAction::Exit => return Ok(Next::Exit),
            }
        }
    }

    fn restart(&self, session: &mut SearchSession, presenter: &mut dyn Presenter) -> Next {
        presenter.render_message(RESTARTING);
        session.restart();
        Next::NewTime
    }
}
