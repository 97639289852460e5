//! Read-only SQLite record store
//!
//! Reads the overlay's `Quests` table joined with `PlayerGear`:
//!
//! | Query | Column |
//! |-------|--------|
//! | exact time | `Quests.FinalTimeDisplay = ?` |
//! | frame window | `Quests.FinalTimeValue BETWEEN ? AND ?` |
//! | detail | `Quests.RunID = ?` |
//!
//! The connection is opened with `SQLITE_OPEN_READ_ONLY` and guarded by a
//! mutex so detail fetches may come from several threads. It is closed when
//! the store is closed or dropped, whichever happens first.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rusqlite::{params, Connection, OpenFlags, Row};
use runviewer_core::{Catalog, Error, RecordStore, Result, RunDetail, RunId, RunSummary};
use tracing::{debug, info, warn};

use crate::record::RunRecord;

const SELECT_RUNS: &str = "SELECT Quests.RunID, Quests.QuestID, Quests.FinalTimeValue, \
     Quests.FinalTimeDisplay, Quests.ObjectiveName, Quests.ActualOverlayMode, \
     Quests.PartySize, Quests.CreatedAt, PlayerGear.WeaponTypeID \
     FROM Quests INNER JOIN PlayerGear ON Quests.RunID = PlayerGear.RunID";

/// Record store over an overlay database file.
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
    path: PathBuf,
    catalog: &'static Catalog,
}

impl SqliteRecordStore {
    /// Open `path` read-only and check that the expected tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_catalog(path, Catalog::builtin())
    }

    /// Open with a specific weapon catalog.
    pub fn open_with_catalog(path: impl AsRef<Path>, catalog: &'static Catalog) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open_with_flags(&path, open_flags()).map_err(|e| {
            Error::StoreUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;

        // Opening is lazy; touch the schema so a wrong file fails here.
        conn.prepare(&format!("{} LIMIT 0", SELECT_RUNS))
            .map_err(|e| {
                Error::StoreUnavailable(format!("{} is not a run database: {}", path.display(), e))
            })?;

        info!("Opened run database {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
            path,
            catalog,
        })
    }

    /// Path of the open dataset.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the connection, reporting any error SQLite raises doing so.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        match self.conn.into_inner().close() {
            Ok(()) => {
                info!("Closed database connection {}", path.display());
                Ok(())
            }
            Err((_, e)) => {
                warn!("Closing {} failed: {}", path.display(), e);
                Err(Error::StoreUnavailable(e.to_string()))
            }
        }
    }

    fn query(&self, clause: &str, params: impl rusqlite::Params) -> Result<Vec<RunRecord>> {
        let sql = format!("{} WHERE {} ORDER BY Quests.RunID", SELECT_RUNS, clause);
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(&sql).map_err(query_failure)?;
        let rows = stmt.query_map(params, read_record).map_err(query_failure)?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(query_failure)
    }
}

impl RecordStore for SqliteRecordStore {
    fn find_by_exact_time(&self, time: &str) -> Result<Vec<RunSummary>> {
        let records = self.query("Quests.FinalTimeDisplay = ?1", params![time])?;
        debug!("Exact search for {} matched {} run(s)", time, records.len());
        Ok(records.iter().map(|r| r.to_summary(self.catalog)).collect())
    }

    fn find_by_frame_range(&self, min: u64, max: u64) -> Result<Vec<RunSummary>> {
        let records = self.query(
            "Quests.FinalTimeValue BETWEEN ?1 AND ?2",
            params![to_sql_int(min), to_sql_int(max)],
        )?;
        debug!(
            "Window search [{}, {}] matched {} run(s)",
            min,
            max,
            records.len()
        );
        Ok(records.iter().map(|r| r.to_summary(self.catalog)).collect())
    }

    fn fetch_detail(&self, id: RunId) -> Result<RunDetail> {
        let records = self.query("Quests.RunID = ?1", params![to_sql_int(id)])?;
        match records.first() {
            Some(record) => Ok(record.to_detail(self.catalog)),
            None => Err(Error::NotFound(id)),
        }
    }
}

/// Paths are always plain file names, never `file:` URIs.
fn open_flags() -> OpenFlags {
    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
}

fn read_record(row: &Row<'_>) -> rusqlite::Result<RunRecord> {
    Ok(RunRecord {
        run_id: unsigned(row, 0)?,
        quest_id: unsigned(row, 1)?,
        final_time_frames: unsigned(row, 2)?,
        final_time_display: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        objective: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        party_size: small(row, 6)?,
        created_at: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        weapon_type_id: small(row, 8)?,
    })
}

fn unsigned(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    let value = row.get::<_, Option<i64>>(idx)?.unwrap_or(0);
    u64::try_from(value).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(idx, value))
}

fn small(row: &Row<'_>, idx: usize) -> rusqlite::Result<u32> {
    let value = unsigned(row, idx)?;
    u32::try_from(value).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(idx, value as i64))
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn query_failure(e: rusqlite::Error) -> Error {
    warn!("Query failed: {}", e);
    Error::QueryFailure(e.to_string())
}
