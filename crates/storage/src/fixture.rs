//! Writers for building small run databases.
//!
//! The schema is the subset of the overlay's database the viewer reads. Used
//! by tests and benchmarks to produce datasets on disk.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::record::RunRecord;

/// DDL for the tables the viewer queries.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS Quests (
    RunID INTEGER PRIMARY KEY,
    QuestID INTEGER NOT NULL,
    FinalTimeValue INTEGER NOT NULL,
    FinalTimeDisplay TEXT NOT NULL,
    ObjectiveName TEXT,
    ActualOverlayMode TEXT,
    PartySize INTEGER,
    CreatedAt TEXT
);
CREATE TABLE IF NOT EXISTS PlayerGear (
    PlayerGearID INTEGER PRIMARY KEY AUTOINCREMENT,
    RunID INTEGER NOT NULL REFERENCES Quests(RunID),
    WeaponTypeID INTEGER NOT NULL
);
";

/// Create the schema on an open connection.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

/// Insert one run and its gear row.
pub fn insert_record(conn: &Connection, record: &RunRecord) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO Quests (RunID, QuestID, FinalTimeValue, FinalTimeDisplay, \
         ObjectiveName, ActualOverlayMode, PartySize, CreatedAt) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.run_id as i64,
            record.quest_id as i64,
            record.final_time_frames as i64,
            record.final_time_display,
            record.objective,
            record.category,
            record.party_size,
            record.created_at,
        ],
    )?;
    conn.execute(
        "INSERT INTO PlayerGear (RunID, WeaponTypeID) VALUES (?1, ?2)",
        params![record.run_id as i64, record.weapon_type_id],
    )?;
    Ok(())
}

/// Create (or extend) a database file at `path` holding `records`.
pub fn write_dataset(path: &Path, records: &[RunRecord]) -> rusqlite::Result<()> {
    let mut conn = Connection::open(path)?;
    create_schema(&conn)?;
    let tx = conn.transaction()?;
    for record in records {
        insert_record(&tx, record)?;
    }
    tx.commit()
}
