//! Repository trait for alias data access.

use crate::error::StorageError;
use async_trait::async_trait;

/// Repository interface for the alias → URL mapping.
///
/// An alias record is `{ id, alias, url }`: the id is assigned by the store,
/// the alias is unique and immutable once created, and there is no update
/// operation — records are created, resolved, and deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAliasRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRepository: Send + Sync {
    /// Stores a new alias for `url` and returns the assigned id.
    ///
    /// Uniqueness is enforced by the storage engine, so two concurrent saves
    /// of the same alias race safely: exactly one wins.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already taken,
    /// [`StorageError::Unavailable`] on any other engine failure.
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasNotFound`] if no record matches,
    /// [`StorageError::Unavailable`] on any other engine failure.
    async fn resolve(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the record stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasNotFound`] if no row was affected,
    /// [`StorageError::Unavailable`] on any other engine failure.
    async fn delete(&self, alias: &str) -> Result<(), StorageError>;
}
