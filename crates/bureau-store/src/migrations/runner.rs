//! Migration runner
//!
//! Each pending migration runs in its own transaction and is recorded in
//! `schema_version` with the checksum of its SQL. A recorded migration whose
//! SQL has since changed is refused rather than silently skipped.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::{get_migrations, Migration};
use rusqlite::{Connection, OptionalExtension};

/// Bring the schema up to date
///
/// ## Errors
///
/// - `Persistence`: a migration failed, or a recorded migration's checksum
///   no longer matches the embedded SQL
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        );",
    )
    .map_err(from_rusqlite)?;

    for migration in get_migrations() {
        let checksum = compute_checksum(migration.sql);
        match recorded_checksum(conn, migration.id)? {
            None => run_migration(conn, &migration, &checksum)?,
            Some(Some(recorded)) if recorded != checksum => {
                return Err(migration_error(
                    migration.id,
                    &format!("checksum mismatch (recorded {}, embedded {})", recorded, checksum),
                ));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Ids of the migrations recorded as applied, in application order
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT migration_id FROM schema_version ORDER BY id")
        .map_err(from_rusqlite)?;
    let ids = stmt
        .query_map([], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;
    Ok(ids)
}

// Outer None: never applied. Inner None: applied without a checksum.
fn recorded_checksum(conn: &Connection, migration_id: &str) -> Result<Option<Option<String>>> {
    conn.query_row(
        "SELECT checksum FROM schema_version WHERE migration_id = ?1",
        [migration_id],
        |row| row.get(0),
    )
    .optional()
    .map_err(from_rusqlite)
}

fn run_migration(conn: &mut Connection, migration: &Migration, checksum: &str) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(migration.sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration.id, chrono::Utc::now().timestamp(), checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(migration_id = migration.id, "applied migration");

    Ok(())
}
