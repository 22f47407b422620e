//! Category storage mapping.

use crate::model::category::{Category, CategoryDraft};
use crate::model::{EntityId, EntityKind};
use crate::repo::{SqliteRepository, StoredEntity};
use rusqlite::{Row, ToSql};

/// SQLite repository over the `category` table.
pub type SqliteCategoryRepository<'conn> = SqliteRepository<'conn, Category>;

impl StoredEntity for Category {
    type Draft = CategoryDraft;

    const KIND: EntityKind = EntityKind::Category;
    const SELECT_ALL_SQL: &'static str = "SELECT id, name FROM category;";
    const SELECT_BY_ID_SQL: &'static str = "SELECT id, name FROM category WHERE id = ?1;";
    const INSERT_SQL: &'static str = "INSERT INTO category (name) VALUES (?1);";
    const UPDATE_SQL: &'static str = "UPDATE category SET name = ?1 WHERE id = ?2;";
    const DELETE_SQL: &'static str = "DELETE FROM category WHERE id = ?1;";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn draft_params(draft: &CategoryDraft) -> Vec<&dyn ToSql> {
        vec![&draft.name]
    }

    fn from_draft(id: EntityId, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }
}
