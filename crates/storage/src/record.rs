//! Row-level representation of a recorded run.
//!
//! [`RunRecord`] mirrors one `Quests` row joined with its `PlayerGear` row.
//! Both stores build their [`RunSummary`]/[`RunDetail`] values through it, so
//! date formatting and weapon naming behave the same everywhere.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use runviewer_core::{time, Catalog, Result, RunDetail, RunId, RunSummary};

/// Shown when `CreatedAt` cannot be parsed.
pub const UNKNOWN_DATE: &str = "????-??-??";

/// One run as stored in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub run_id: RunId,
    pub quest_id: u64,
    pub final_time_frames: u64,
    pub final_time_display: String,
    pub objective: String,
    pub category: String,
    pub party_size: u32,
    pub created_at: String,
    pub weapon_type_id: u32,
}

impl RunRecord {
    /// A run finished at `time` (`mm:ss.fff`); the frame count is derived from it.
    pub fn new(run_id: RunId, time: &str) -> Result<Self> {
        Ok(Self {
            run_id,
            quest_id: 0,
            final_time_frames: time::encode(time)?,
            final_time_display: time.to_string(),
            objective: String::new(),
            category: String::new(),
            party_size: 1,
            created_at: String::new(),
            weapon_type_id: 0,
        })
    }

    pub fn quest(mut self, quest_id: u64) -> Self {
        self.quest_id = quest_id;
        self
    }

    pub fn objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn weapon(mut self, weapon_type_id: u32) -> Self {
        self.weapon_type_id = weapon_type_id;
        self
    }

    /// Override the stored frame count (the overlay records it separately).
    pub fn frames(mut self, frames: u64) -> Self {
        self.final_time_frames = frames;
        self
    }

    /// Project to a result table row.
    pub fn to_summary(&self, catalog: &Catalog) -> RunSummary {
        RunSummary {
            run_id: self.run_id,
            time: self.final_time_display.clone(),
            date: format_date(&self.created_at),
            objective: self.objective.clone(),
            category: self.category.clone(),
            quest_id: self.quest_id,
            weapon: catalog.weapon_name(self.weapon_type_id),
            party_size: self.party_size,
        }
    }

    /// Full metadata for display.
    pub fn to_detail(&self, catalog: &Catalog) -> RunDetail {
        RunDetail {
            summary: self.to_summary(catalog),
            final_time_frames: self.final_time_frames,
            weapon_type_id: self.weapon_type_id,
            created_at: self.created_at.clone(),
        }
    }
}

/// Reduce a stored timestamp to its UTC calendar date.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).date_naive().to_string();
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.date().to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.to_string();
    }
    UNKNOWN_DATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2023-02-04 18:22:01.123"), "2023-02-04");
        assert_eq!(format_date("2023-02-04T18:22:01"), "2023-02-04");
        assert_eq!(format_date("2023-02-04"), "2023-02-04");
        assert_eq!(format_date("2023-02-04T23:30:00-05:00"), "2023-02-05");
    }

    #[test]
    fn test_format_date_unparseable() {
        assert_eq!(format_date(""), UNKNOWN_DATE);
        assert_eq!(format_date("yesterday"), UNKNOWN_DATE);
    }

    #[test]
    fn test_record_derives_frames() {
        let record = RunRecord::new(7, "02:30.000").unwrap();
        assert_eq!(record.final_time_frames, 4500);
        assert!(RunRecord::new(7, "2:30").is_err());
    }

    #[test]
    fn test_summary_projection() {
        let record = RunRecord::new(3, "01:15.500")
            .unwrap()
            .quest(23_604)
            .objective("Raviente")
            .category("Speedrun")
            .party_size(4)
            .created_at("2023-02-04 10:00:00")
            .weapon(11);

        let summary = record.to_summary(Catalog::builtin());
        assert_eq!(summary.run_id, 3);
        assert_eq!(summary.time, "01:15.500");
        assert_eq!(summary.date, "2023-02-04");
        assert_eq!(summary.weapon, "Tonfa");
        assert_eq!(summary.party_size, 4);

        let detail = record.to_detail(Catalog::builtin());
        assert_eq!(detail.final_time_frames, 2265);
        assert_eq!(detail.weapon_type_id, 11);
        assert_eq!(detail.summary, summary);
    }
}
