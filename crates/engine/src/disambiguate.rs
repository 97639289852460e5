//! Disambiguator
//!
//! Turns a search result into full run details. A single match is shown
//! straight away; several matches ask the user which run IDs to view.
//!
//! Detail fetches for the chosen IDs are spread over a small, fixed number
//! of scoped threads and rendered in the order the IDs were typed. A missing or failing ID is
//! reported on its own line and never stops the others.

use std::thread;

use runviewer_core::{Error, Presenter, Prompt, RecordStore, Result, RunDetail, RunId, RunSummary};
use tracing::{debug, warn};

/// Upper bound on concurrent detail fetches.
pub const MAX_FETCH_WORKERS: usize = 8;

pub const SELECTION_PROMPT: &str =
    "Enter the run IDs you want to view stats from, separated by spaces:";

/// What a disambiguation pass showed, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisambiguationReport {
    /// Whether the user was asked for IDs
    pub prompted: bool,
    /// IDs rendered in full
    pub shown: Vec<RunId>,
    /// IDs the store does not know
    pub missing: Vec<RunId>,
    /// IDs whose fetch failed, with the reason
    pub failed: Vec<(RunId, String)>,
}

/// Parse whitespace-separated non-negative run IDs.
pub fn parse_selection(input: &str) -> Result<Vec<RunId>> {
    let invalid = || Error::InvalidSelection {
        input: input.to_string(),
    };
    let ids = input
        .split_whitespace()
        .map(|token| {
            if token.bytes().all(|b| b.is_ascii_digit()) {
                token.parse::<RunId>().map_err(|_| invalid())
            } else {
                Err(invalid())
            }
        })
        .collect::<Result<Vec<_>>>()?;
    if ids.is_empty() {
        return Err(invalid());
    }
    Ok(ids)
}

fn validate_selection(input: &str) -> Result<()> {
    parse_selection(input).map(|_| ())
}

pub struct Disambiguator<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> Disambiguator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Show the runs in `selection`, asking which ones when there are several.
    pub fn disambiguate(
        &self,
        selection: &[RunSummary],
        presenter: &mut dyn Presenter,
        prompt: &mut dyn Prompt,
    ) -> Result<DisambiguationReport> {
        match selection {
            [] => Ok(DisambiguationReport::default()),
            [only] => Ok(self.show(&[only.run_id], presenter)),
            _ => self.prompt_and_show(presenter, prompt),
        }
    }

    /// Ask for run IDs and show them, whatever the current selection holds.
    pub fn prompt_and_show(
        &self,
        presenter: &mut dyn Presenter,
        prompt: &mut dyn Prompt,
    ) -> Result<DisambiguationReport> {
        let answer = prompt.ask_text(SELECTION_PROMPT, &validate_selection)?;
        let ids = parse_selection(&answer)?;
        let mut report = self.show(&ids, presenter);
        report.prompted = true;
        Ok(report)
    }

    /// Fetch and render `ids`, one entry per ID in input order.
    pub fn show(&self, ids: &[RunId], presenter: &mut dyn Presenter) -> DisambiguationReport {
        let mut report = DisambiguationReport::default();
        for (id, result) in self.fetch_all(ids) {
            match result {
                Ok(detail) => {
                    presenter.render_detail(&detail);
                    report.shown.push(id);
                }
                Err(Error::NotFound(_)) => {
                    warn!("Run {} not found", id);
                    presenter.render_message(&format!("No run found with ID {}.", id));
                    report.missing.push(id);
                }
                Err(e) => {
                    warn!("Fetching run {} failed: {}", id, e);
                    presenter.render_message(&format!("Could not load run {}: {}", id, e));
                    report.failed.push((id, e.to_string()));
                }
            }
        }
        report
    }

    fn fetch_all(&self, ids: &[RunId]) -> Vec<(RunId, Result<RunDetail>)> {
        let workers = fetch_workers(ids.len());
        debug!("Fetching {} run detail(s) on {} worker(s)", ids.len(), workers);
        if workers < 2 {
            return ids.iter().map(|&id| (id, self.store.fetch_detail(id))).collect();
        }

        let store = self.store;
        let mut slots: Vec<Option<Result<RunDetail>>> = ids.iter().map(|_| None).collect();
        thread::scope(|scope| {
            // Worker `w` takes every `workers`-th ID starting at index `w`.
            let spawned: Vec<_> = (0..workers)
                .map(|worker| {
                    thread::Builder::new()
                        .name(format!("run-fetch-{}", worker))
                        .spawn_scoped(scope, move || {
                            ids.iter()
                                .enumerate()
                                .skip(worker)
                                .step_by(workers)
                                .map(|(slot, &id)| (slot, store.fetch_detail(id)))
                                .collect::<Vec<_>>()
                        })
                })
                .collect();

            for (worker, handle) in spawned.into_iter().enumerate() {
                let fetched = match handle {
                    Ok(handle) => handle
                        .join()
                        .map_err(|_| "fetch worker panicked".to_string()),
                    Err(e) => Err(format!("could not start fetch worker: {}", e)),
                };
                match fetched {
                    Ok(results) => {
                        for (slot, result) in results {
                            slots[slot] = Some(result);
                        }
                    }
                    Err(reason) => {
                        warn!("{}", reason);
                        for slot in (worker..ids.len()).step_by(workers) {
                            slots[slot] = Some(Err(Error::QueryFailure(reason.clone())));
                        }
                    }
                }
            }
        });

        ids.iter()
            .zip(slots)
            .map(|(&id, slot)| {
                let result = slot.unwrap_or_else(|| {
                    Err(Error::QueryFailure(format!("run {} was not fetched", id)))
                });
                (id, result)
            })
            .collect()
    }
}

/// Number of fetch threads for `count` IDs: at most one per core, capped.
fn fetch_workers(count: usize) -> usize {
    let cores = thread::available_parallelism().map_or(1, |n| n.get());
    cores.min(MAX_FETCH_WORKERS).min(count)
}
