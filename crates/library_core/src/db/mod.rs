//! SQLite storage bootstrap.
//!
//! # Responsibility
//! - Open and configure the catalog's SQLite connection.
//! - Create the catalog tables before any request touches them.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Repositories must not read or write rows before the schema is applied.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod schema;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// The shared connection thread has stopped accepting calls.
    ConnectionClosed,
    /// Any other failure reported by the shared connection handle.
    Worker(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::ConnectionClosed => write!(f, "database connection is closed"),
            Self::Worker(message) => write!(f, "database connection failure: {message}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::ConnectionClosed | Self::Worker(_) => {
                None
            }
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<tokio_rusqlite::Error> for DbError {
    fn from(value: tokio_rusqlite::Error) -> Self {
        match value {
            tokio_rusqlite::Error::ConnectionClosed => Self::ConnectionClosed,
            tokio_rusqlite::Error::Rusqlite(err) => Self::Sqlite(err),
            other => Self::Worker(other.to_string()),
        }
    }
}
