//! Core domain logic for the library catalog.
//! Owns the resource model, SQLite persistence and the async catalog service.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::author::{Author, AuthorDraft};
pub use model::book::{Book, BookDraft};
pub use model::category::{Category, CategoryDraft};
pub use model::{EntityId, EntityKind};
pub use repo::author_repo::SqliteAuthorRepository;
pub use repo::book_repo::SqliteBookRepository;
pub use repo::category_repo::SqliteCategoryRepository;
pub use repo::{
    Deleted, RepoError, RepoResult, Repository, SqliteRepository, StoredEntity, UpdateOutcome,
};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
