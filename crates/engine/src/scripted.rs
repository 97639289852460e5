//! Scripted collaborators for driving sessions without a terminal.
//!
//! [`ScriptedPrompt`] answers from a queue and behaves like an interactive
//! prompt: rejected answers are recorded and the next one is tried. When the
//! queue runs dry it reports [`Error::Interrupted`], which ends a session the
//! same way Ctrl-D does. [`RecordingPresenter`] keeps everything rendered.

use std::collections::VecDeque;

use runviewer_core::{Error, Presenter, Prompt, Result, RunDetail, RunId, RunSummary, Validator};

/// Prompt that replays canned answers.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
    rejections: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, T>(answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Messages of every question asked, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Why each rejected answer was refused.
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask_text(&mut self, message: &str, validator: Validator<'_>) -> Result<String> {
        self.asked.push(message.to_string());
        loop {
            let answer = self.answers.pop_front().ok_or(Error::Interrupted)?;
            match validator(&answer) {
                Ok(()) => return Ok(answer),
                Err(e) => self.rejections.push(e.to_string()),
            }
        }
    }

    fn ask_choice(&mut self, message: &str, options: &[&str]) -> Result<String> {
        self.asked.push(message.to_string());
        loop {
            let answer = self.answers.pop_front().ok_or(Error::Interrupted)?;
            if options.contains(&answer.as_str()) {
                return Ok(answer);
            }
            self.rejections
                .push(format!("'{}' is not one of {:?}", answer, options));
        }
    }
}

/// One thing a [`RecordingPresenter`] was asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// A summary table, by run id
    Table(Vec<RunId>),
    /// A full run
    Detail(RunId),
    /// A status line
    Message(String),
}

/// Presenter that records instead of printing.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    events: Vec<Rendered>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Rendered] {
        &self.events
    }

    /// Ids of every detail rendered, in order.
    pub fn details(&self) -> Vec<RunId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Rendered::Detail(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Rendered::Message(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<Vec<RunId>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Rendered::Table(ids) => Some(ids.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn render_summary_table(&mut self, runs: &[RunSummary]) {
        self.events
            .push(Rendered::Table(runs.iter().map(|r| r.run_id).collect()));
    }

    fn render_detail(&mut self, detail: &RunDetail) {
        self.events.push(Rendered::Detail(detail.run_id()));
    }

    fn render_message(&mut self, text: &str) {
        self.events.push(Rendered::Message(text.to_string()));
    }
}
