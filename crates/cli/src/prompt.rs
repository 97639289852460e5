//! Terminal prompt backed by rustyline.
//!
//! Free-text questions are re-asked until their validator accepts the
//! answer. Choices are listed with numbers; either the number or the label
//! (any case) selects one. Ctrl-C and Ctrl-D close the prompt.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use runviewer_core::{Error, Prompt, Result, Validator};
use tracing::debug;

pub struct TerminalPrompt {
    editor: DefaultEditor,
}

impl TerminalPrompt {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self { editor })
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let line = self.editor.readline(prompt).map_err(readline_error)?;
        let line = line.trim().to_string();
        if !line.is_empty() {
            if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                debug!("Could not record history entry: {}", e);
            }
        }
        Ok(line)
    }
}

impl Prompt for TerminalPrompt {
    fn ask_text(&mut self, message: &str, validator: Validator<'_>) -> Result<String> {
        println!("? {}", message);
        loop {
            let line = self.read_line("> ")?;
            match validator(&line) {
                Ok(()) => return Ok(line),
                Err(e) => println!(">> {}", e),
            }
        }
    }

    fn ask_choice(&mut self, message: &str, options: &[&str]) -> Result<String> {
        println!("? {}", message);
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }
        loop {
            let line = self.read_line("> ")?;
            match match_choice(&line, options) {
                Some(choice) => return Ok(choice.to_string()),
                None => println!(">> Enter a number from 1 to {}", options.len()),
            }
        }
    }
}

/// Resolve an answer to one of `options`, by 1-based number or label.
pub fn match_choice<'o>(answer: &str, options: &[&'o str]) -> Option<&'o str> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(answer))
        .copied()
}

fn readline_error(e: ReadlineError) -> Error {
    match e {
        ReadlineError::Interrupted | ReadlineError::Eof => Error::Interrupted,
        ReadlineError::Io(io) => Error::Io(io),
        other => Error::Io(std::io::Error::new(std::io::ErrorKind::Other, other.to_string())),
    }
}
