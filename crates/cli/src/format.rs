//! Plain-text rendering of runs.
//!
//! Summaries are laid out as an aligned table, one row per run; details as
//! a labelled block per run.

use std::io::Write;

use runviewer_core::{time, Presenter, RunDetail, RunSummary};
use tracing::warn;

const SUMMARY_HEADERS: [&str; 8] = [
    "Run ID",
    "Time",
    "Date",
    "Objective",
    "Category",
    "Quest ID",
    "Weapon",
    "Party",
];

/// Presenter writing to any [`Write`], normally stdout.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("Failed to write output: {}", e);
        }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render_summary_table(&mut self, runs: &[RunSummary]) {
        let text = format_summary_table(runs);
        self.emit(&text);
    }

    fn render_detail(&mut self, detail: &RunDetail) {
        let text = format_detail(detail);
        self.emit(&text);
    }

    fn render_message(&mut self, text: &str) {
        self.emit(text);
    }
}

/// Format runs as an aligned table with a header row.
pub fn format_summary_table(runs: &[RunSummary]) -> String {
    let rows: Vec<[String; 8]> = runs
        .iter()
        .map(|r| {
            [
                r.run_id.to_string(),
                r.time.clone(),
                r.date.clone(),
                r.objective.clone(),
                r.category.clone(),
                r.quest_id.to_string(),
                r.weapon.clone(),
                r.party_size.to_string(),
            ]
        })
        .collect();

    let mut widths = SUMMARY_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = SUMMARY_HEADERS.iter().map(|h| h.to_string()).collect();
    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut out = vec![line(&header[..]), rule];
    out.extend(rows.iter().map(|row| line(&row[..])));
    out.join("\n")
}

/// Format one run as a labelled block.
pub fn format_detail(detail: &RunDetail) -> String {
    let s = &detail.summary;
    let fields = [
        ("Time", format!("{} ({} frames)", s.time, detail.final_time_frames)),
        ("Frames as time", time::decode(detail.final_time_frames)),
        ("Date", s.date.clone()),
        ("Quest ID", s.quest_id.to_string()),
        ("Objective", s.objective.clone()),
        ("Category", s.category.clone()),
        ("Weapon", format!("{} ({})", s.weapon, detail.weapon_type_id)),
        ("Party size", s.party_size.to_string()),
    ];

    let mut out = format!("Run {}", s.run_id);
    for (label, value) in fields {
        out.push_str(&format!("\n  {:<15}{}", label, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(run_id: u64, objective: &str) -> RunSummary {
        RunSummary {
            run_id,
            time: "01:15.500".into(),
            date: "2023-02-04".into(),
            objective: objective.into(),
            category: "Speedrun".into(),
            quest_id: 23_604,
            weapon: "Long Sword".into(),
            party_size: 1,
        }
    }

    #[test]
    fn test_table_columns_align() {
        let table = format_summary_table(&[summary(1, "Zenith Gravios"), summary(12, "Duremudira")]);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Run ID | Time"));
        let col = lines[0].find("Time").unwrap();
        assert_eq!(&lines[2][col..col + 9], "01:15.500");
        assert_eq!(&lines[3][col..col + 9], "01:15.500");
        assert!(lines[2].contains("Zenith Gravios"));
    }

    #[test]
    fn test_empty_table_has_header() {
        let table = format_summary_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_detail_block() {
        let detail = RunDetail {
            summary: summary(7, "Blue Taikun Zamuza"),
            final_time_frames: 2265,
            weapon_type_id: 7,
            created_at: "2023-02-04 10:00:00".into(),
        };
        let text = format_detail(&detail);
        assert!(text.starts_with("Run 7\n"));
        assert!(text.contains("01:15.500 (2265 frames)"));
        assert!(text.contains("Long Sword (7)"));
    }

    #[test]
    fn test_presenter_writes_lines() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.render_message("Found a run!");
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(out, "Found a run!\n");
    }
}
