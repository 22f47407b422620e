//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the process-wide store handle and lend it to one repository call
//!   per request.
//! - Bridge the synchronous SQLite repository into async request tasks.
//!
//! # Invariants
//! - Each service call runs exactly one repository operation.
//! - No application-level lock wraps the handle: the connection thread
//!   serializes statements in arrival order.
//! - Failures are returned immediately, never retried.

use crate::db::DbError;
use crate::model::EntityId;
use crate::repo::{
    Deleted, RepoError, RepoResult, Repository, SqliteRepository, StoredEntity, UpdateOutcome,
};
use log::error;

/// Cloneable use-case service over the shared catalog connection.
#[derive(Clone)]
pub struct CatalogService {
    conn: tokio_rusqlite::Connection,
}

impl CatalogService {
    /// Creates a service over an already running connection handle.
    pub fn new(conn: tokio_rusqlite::Connection) -> Self {
        Self { conn }
    }

    /// Moves a bootstrapped connection (see [`crate::db::open_db`]) onto its
    /// own connection thread and wraps the resulting handle.
    pub fn from_connection(conn: rusqlite::Connection) -> Self {
        Self::new(tokio_rusqlite::Connection::from(conn))
    }

    /// Lists every record of kind `E`.
    pub async fn list_all<E: StoredEntity>(&self) -> RepoResult<Vec<E>> {
        self.run(|repo: &SqliteRepository<'_, E>| repo.list_all())
            .await
    }

    /// Gets one record of kind `E` by id.
    pub async fn get_by_id<E: StoredEntity>(&self, id: EntityId) -> RepoResult<E> {
        self.run(move |repo: &SqliteRepository<'_, E>| repo.get_by_id(id))
            .await
    }

    /// Creates a record of kind `E` and returns it with its assigned id.
    pub async fn create<E: StoredEntity>(&self, draft: E::Draft) -> RepoResult<E> {
        self.run(move |repo: &SqliteRepository<'_, E>| repo.create(draft))
            .await
    }

    /// Overwrites the record of kind `E` matching `id`.
    pub async fn update<E: StoredEntity>(
        &self,
        id: EntityId,
        draft: E::Draft,
    ) -> RepoResult<UpdateOutcome<E>> {
        self.run(move |repo: &SqliteRepository<'_, E>| repo.update(id, draft))
            .await
    }

    /// Deletes the record of kind `E` matching `id`, if any.
    pub async fn delete_by_id<E: StoredEntity>(&self, id: EntityId) -> RepoResult<Deleted> {
        self.run(move |repo: &SqliteRepository<'_, E>| repo.delete_by_id(id))
            .await
    }

    async fn run<E, T, F>(&self, op: F) -> RepoResult<T>
    where
        E: StoredEntity,
        T: Send + 'static,
        F: FnOnce(&SqliteRepository<'_, E>) -> RepoResult<T> + Send + 'static,
    {
        let outcome = self
            .conn
            .call(move |conn| Ok(op(&SqliteRepository::new(conn))))
            .await;

        match outcome {
            Ok(result) => result,
            Err(err) => {
                let err = DbError::from(err);
                error!(
                    "event=store_call module=service status=error kind={} error={}",
                    E::KIND,
                    err
                );
                Err(RepoError::Db(err))
            }
        }
    }
}
