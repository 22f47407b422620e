//! Book resource.
//!
//! # Invariants
//! - `author_id` and `category_id` are plain values; nothing checks that the
//!   referenced author or category exists.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// Persisted book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: EntityId,
    pub author_id: EntityId,
    pub category_id: EntityId,
    pub title: String,
    pub pages: i64,
}

/// Book fields accepted on create and update.
///
/// Every field is required; a body missing one fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub author_id: EntityId,
    pub category_id: EntityId,
    pub title: String,
    pub pages: i64,
}
