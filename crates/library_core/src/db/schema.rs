//! Versioned schema scripts.
//!
//! # Invariants
//! - Script versions are strictly increasing, starting at 1.
//! - `PRAGMA user_version` always equals the last applied script.
//! - Pending scripts apply in one transaction: all or none.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` pairs in application order.
const SCHEMA_SCRIPTS: &[(u32, &str)] = &[(1, include_str!("0001_catalog.sql"))];

/// Returns the newest schema version this binary can create.
pub fn latest_version() -> u32 {
    SCHEMA_SCRIPTS.last().map_or(0, |(version, _)| *version)
}

/// Returns the schema version recorded in the database file.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Brings the database up to [`latest_version`].
///
/// Refuses databases written by a newer binary.
pub fn apply_schema(conn: &mut Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    let latest = latest_version();

    if found > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: latest,
        });
    }

    let pending = SCHEMA_SCRIPTS
        .iter()
        .filter(|(version, _)| *version > found)
        .collect::<Vec<_>>();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in &pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!(
        "event=schema_apply module=db status=ok from_version={found} to_version={latest} scripts={}",
        pending.len()
    );
    Ok(())
}
