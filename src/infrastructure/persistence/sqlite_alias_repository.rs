//! SQLite implementation of the alias repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::time::Duration;

use crate::domain::repositories::AliasRepository;
use crate::error::StorageError;
use crate::utils::db_error::is_unique_violation;

/// SQLite repository for alias storage and retrieval.
///
/// The pool is shared across in-flight requests; SQLx caches prepared
/// statements per pooled connection, so each call amounts to parameter
/// binding and execution. Alias uniqueness is enforced by the UNIQUE
/// constraint on the `alias` column, not by application-level locking.
pub struct SqliteAliasRepository {
    pool: SqlitePool,
}

impl SqliteAliasRepository {
    /// Opens (or creates) the database at `storage_path` and ensures the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the file cannot be opened or
    /// the schema cannot be created; the repository is not constructed in
    /// that case.
    pub async fn connect(storage_path: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(storage_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// Wraps an existing pool, ensuring the schema exists.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS url (
                id INTEGER PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)")
            .execute(&pool)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl AliasRepository for SqliteAliasRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?1, ?2)")
            .bind(url)
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StorageError::AliasExists
                } else {
                    StorageError::Unavailable(e)
                }
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn resolve(&self, alias: &str) -> Result<String, StorageError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?1")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await?;

        url.ok_or(StorageError::AliasNotFound)
    }

    async fn delete(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?1")
            .bind(alias)
            .execute(&self.pool)
            .await?;

        // A no-op delete is not an engine error; only the row count tells.
        if result.rows_affected() == 0 {
            return Err(StorageError::AliasNotFound);
        }

        Ok(())
    }
}
