//! Author storage mapping.

use crate::model::author::{Author, AuthorDraft};
use crate::model::{EntityId, EntityKind};
use crate::repo::{SqliteRepository, StoredEntity};
use rusqlite::{Row, ToSql};

/// SQLite repository over the `author` table.
pub type SqliteAuthorRepository<'conn> = SqliteRepository<'conn, Author>;

impl StoredEntity for Author {
    type Draft = AuthorDraft;

    const KIND: EntityKind = EntityKind::Author;
    const SELECT_ALL_SQL: &'static str = "SELECT id, name FROM author;";
    const SELECT_BY_ID_SQL: &'static str = "SELECT id, name FROM author WHERE id = ?1;";
    const INSERT_SQL: &'static str = "INSERT INTO author (name) VALUES (?1);";
    const UPDATE_SQL: &'static str = "UPDATE author SET name = ?1 WHERE id = ?2;";
    const DELETE_SQL: &'static str = "DELETE FROM author WHERE id = ?1;";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn draft_params(draft: &AuthorDraft) -> Vec<&dyn ToSql> {
        vec![&draft.name]
    }

    fn from_draft(id: EntityId, draft: AuthorDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }
}
