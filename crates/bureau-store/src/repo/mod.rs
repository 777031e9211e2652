//! Repository layer for persisting bureau records to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
