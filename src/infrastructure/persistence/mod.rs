//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.

pub mod sqlite_alias_repository;

pub use sqlite_alias_repository::SqliteAliasRepository;
