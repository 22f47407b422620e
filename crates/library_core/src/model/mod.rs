//! Resource model for the library catalog.
//!
//! # Responsibility
//! - Define the records exchanged between storage and the HTTP surface.
//! - Keep wire field names (`snake_case`) in one place via serde derives.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - Each entity kind owns its own id namespace.
//! - Drafts never carry an `id`; one sent on the wire is ignored.

pub mod author;
pub mod book;
pub mod category;

use std::fmt::{Display, Formatter};

/// Store-assigned identifier shared by every entity kind.
pub type EntityId = i64;

/// The three resource kinds served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Author,
    Category,
    Book,
}

impl EntityKind {
    /// Lowercase label used in logs and client-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Category => "category",
            Self::Book => "book",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
