//! Database migrations for raspis.
//!
//! Each migration upgrades the schema by one version and runs when the
//! database is opened. The version lives in `PRAGMA user_version`.

use rusqlite::Connection;

use crate::error::ScheduleError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 for a new database.
pub fn get_version(conn: &Connection) -> Result<i32, ScheduleError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| ScheduleError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), ScheduleError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| ScheduleError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), ScheduleError> {
    let current = get_version(conn)?;

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::debug!(version, "running migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), ScheduleError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(ScheduleError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the key-value table holding electives, notes and tasks.
fn migrate_v1(conn: &Connection) -> Result<(), ScheduleError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS cloud_storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| ScheduleError::Database(format!("Migration v1 failed: {e}")))
}
