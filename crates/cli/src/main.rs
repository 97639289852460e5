//! Run Viewer CLI: look up recorded quest runs by completion time.
//!
//! Place the binary next to the overlay's `*.sqlite` database and run it
//! with no arguments. Set `RUNVIEWER_LOG=debug` to see query logging on
//! stderr.

mod format;
mod prompt;

use std::io::IsTerminal;
use std::process;

use clap::Command;
use runviewer::RunViewer;
use tracing::Level;

use format::TextPresenter;
use prompt::TerminalPrompt;

const LOG_ENV: &str = "RUNVIEWER_LOG";

fn build_cli() -> Command {
    Command::new("runviewer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Look up recorded quest runs by completion time")
        .after_help(
            "Searches the single *.sqlite database in the current directory. \
             An optional runviewer.toml there adjusts the search window.",
        )
}

fn main() {
    let _matches = build_cli().get_matches();
    init_logging();

    let viewer = match RunViewer::open(".") {
        Ok(viewer) => viewer,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let exit_code = run_session(&viewer);

    match viewer.close() {
        Ok(()) => println!("Closed database connection."),
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    }
    process::exit(exit_code);
}

fn run_session(viewer: &RunViewer) -> i32 {
    if !std::io::stdin().is_terminal() {
        tracing::warn!("stdin is not a terminal; answers are read line by line");
    }

    let mut prompt = match TerminalPrompt::new() {
        Ok(prompt) => prompt,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };
    let mut presenter = TextPresenter::new(std::io::stdout());

    match viewer.run(&mut prompt, &mut presenter) {
        Ok(end) => {
            tracing::debug!(searches = end.searches, restarts = end.restarts, "session finished");
            0
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}

fn init_logging() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
