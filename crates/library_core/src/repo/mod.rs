//! Repository layer: contracts and the SQLite implementation.
//!
//! # Responsibility
//! - Translate catalog operations into exactly one parameterized statement.
//! - Decode result rows positionally into resource records.
//! - Report semantic outcomes (`NotFound`, zero-row updates) separately from
//!   store failures.
//!
//! # Invariants
//! - Every operation issues one statement; nothing spans a transaction.
//! - Nothing is cached between calls.
//! - Writes never check that a book's author or category exists.

pub mod author_repo;
pub mod book_repo;
pub mod category_repo;

use crate::db::DbError;
use crate::model::{EntityId, EntityKind};
use log::debug;
use rusqlite::{Connection, OptionalExtension, Row, ToSql};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { kind: EntityKind, id: EntityId },
    InvalidData(String),
}

impl RepoError {
    /// Returns `true` when the error reports an absent row rather than a
    /// store failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::FromSqlConversionFailure(index, kind, err) => Self::InvalidData(
                format!("column {index} holds {kind} that does not decode: {err}"),
            ),
            rusqlite::Error::InvalidColumnType(index, name, kind) => Self::InvalidData(format!(
                "column {index} (`{name}`) holds unexpected {kind}"
            )),
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Result of a keyed full-record update.
///
/// A zero-row update is not an error: callers pick how to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome<E> {
    Updated(E),
    NotFound,
}

/// Result of a keyed delete. Absence of the target is still a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted {
    /// Rows removed by the statement, `0` when the id was absent.
    pub removed: usize,
}

/// Per-kind storage mapping: SQL text, parameter binding and row decode.
///
/// `SELECT_SQL` must list columns in the order `from_row` reads them.
/// `UPDATE_SQL` binds the draft parameters first and the id last.
pub trait StoredEntity: Sized + Send + 'static {
    type Draft: Send + 'static;

    const KIND: EntityKind;
    const SELECT_ALL_SQL: &'static str;
    const SELECT_BY_ID_SQL: &'static str;
    const INSERT_SQL: &'static str;
    const UPDATE_SQL: &'static str;
    const DELETE_SQL: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
    fn draft_params(draft: &Self::Draft) -> Vec<&dyn ToSql>;
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;
}

/// Repository interface for one entity kind.
pub trait Repository<E: StoredEntity> {
    /// Reads every row of the kind's table, in no particular order.
    fn list_all(&self) -> RepoResult<Vec<E>>;
    /// Reads one row by id; absence is `RepoError::NotFound`.
    fn get_by_id(&self, id: EntityId) -> RepoResult<E>;
    /// Inserts a row and returns it with the store-assigned id.
    fn create(&self, draft: E::Draft) -> RepoResult<E>;
    /// Overwrites every mutable field of the row matching `id`.
    fn update(&self, id: EntityId, draft: E::Draft) -> RepoResult<UpdateOutcome<E>>;
    /// Removes the row matching `id` if present.
    fn delete_by_id(&self, id: EntityId) -> RepoResult<Deleted>;
}

/// SQLite-backed repository for any [`StoredEntity`].
pub struct SqliteRepository<'conn, E> {
    conn: &'conn Connection,
    _entity: PhantomData<fn() -> E>,
}

impl<'conn, E: StoredEntity> SqliteRepository<'conn, E> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }
}

impl<E: StoredEntity> Repository<E> for SqliteRepository<'_, E> {
    fn list_all(&self) -> RepoResult<Vec<E>> {
        let mut stmt = self.conn.prepare(E::SELECT_ALL_SQL)?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(E::from_row(row)?);
        }

        Ok(records)
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<E> {
        self.conn
            .query_row(E::SELECT_BY_ID_SQL, [id], |row| E::from_row(row))
            .optional()?
            .ok_or(RepoError::NotFound { kind: E::KIND, id })
    }

    fn create(&self, draft: E::Draft) -> RepoResult<E> {
        self.conn
            .execute(E::INSERT_SQL, E::draft_params(&draft).as_slice())?;
        let id = self.conn.last_insert_rowid();
        debug!(
            "event=repo_create module=repo status=ok kind={} id={id}",
            E::KIND
        );
        Ok(E::from_draft(id, draft))
    }

    fn update(&self, id: EntityId, draft: E::Draft) -> RepoResult<UpdateOutcome<E>> {
        let changed = {
            let mut params = E::draft_params(&draft);
            params.push(&id);
            self.conn.execute(E::UPDATE_SQL, params.as_slice())?
        };

        if changed == 0 {
            debug!(
                "event=repo_update module=repo status=not_found kind={} id={id}",
                E::KIND
            );
            return Ok(UpdateOutcome::NotFound);
        }

        Ok(UpdateOutcome::Updated(E::from_draft(id, draft)))
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<Deleted> {
        let removed = self.conn.execute(E::DELETE_SQL, [id])?;
        debug!(
            "event=repo_delete module=repo status=ok kind={} id={id} removed={removed}",
            E::KIND
        );
        Ok(Deleted { removed })
    }
}
