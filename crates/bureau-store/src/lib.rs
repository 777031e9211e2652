//! Dating bureau store - SQLite persistence
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded schema migrations with checksums
//! - `SqliteRepo`: users, likes and messages

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
