//! SQLite storage implementation for MindGrow.
//!
//! This crate is the only place where Diesel dependencies exist. It implements
//! the repository traits defined in `mindgrow-core` and contains:
//! - Database connection pooling and the single-writer actor
//! - Embedded Diesel migrations
//! - Repository implementations for goals and journal entries
//! - Database-specific model types (with Diesel derives)

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod goals;
pub mod journal;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from mindgrow-core for convenience
pub use mindgrow_core::errors::{DatabaseError, Error, Result};
