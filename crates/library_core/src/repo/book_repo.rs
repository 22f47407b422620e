//! Book storage mapping.
//!
//! # Invariants
//! - Column order is `id, author_id, category_id, title, pages`.
//! - `author_id` / `category_id` are written as given, never resolved.

use crate::model::book::{Book, BookDraft};
use crate::model::{EntityId, EntityKind};
use crate::repo::{SqliteRepository, StoredEntity};
use rusqlite::{Row, ToSql};

/// SQLite repository over the `book` table.
pub type SqliteBookRepository<'conn> = SqliteRepository<'conn, Book>;

impl StoredEntity for Book {
    type Draft = BookDraft;

    const KIND: EntityKind = EntityKind::Book;
    const SELECT_ALL_SQL: &'static str = "SELECT
        id,
        author_id,
        category_id,
        title,
        pages
    FROM book;";
    const SELECT_BY_ID_SQL: &'static str = "SELECT
        id,
        author_id,
        category_id,
        title,
        pages
    FROM book
    WHERE id = ?1;";
    const INSERT_SQL: &'static str = "INSERT INTO book (
            author_id,
            category_id,
            title,
            pages
        ) VALUES (?1, ?2, ?3, ?4);";
    const UPDATE_SQL: &'static str = "UPDATE book
         SET
            author_id = ?1,
            category_id = ?2,
            title = ?3,
            pages = ?4
         WHERE id = ?5;";
    const DELETE_SQL: &'static str = "DELETE FROM book WHERE id = ?1;";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            author_id: row.get(1)?,
            category_id: row.get(2)?,
            title: row.get(3)?,
            pages: row.get(4)?,
        })
    }

    fn draft_params(draft: &BookDraft) -> Vec<&dyn ToSql> {
        vec![
            &draft.author_id,
            &draft.category_id,
            &draft.title,
            &draft.pages,
        ]
    }

    fn from_draft(id: EntityId, draft: BookDraft) -> Self {
        Self {
            id,
            author_id: draft.author_id,
            category_id: draft.category_id,
            title: draft.title,
            pages: draft.pages,
        }
    }
}
