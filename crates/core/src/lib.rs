//! MindGrow Core - the goal and journal domain shared by server and client.
//!
//! This crate holds the canonical schema (goals, journal entries), the
//! progress consistency rules, and the service/repository traits. It is
//! database-agnostic; the `storage-sqlite` crate implements the repository
//! traits and the `client` crate reuses the models for local state.

pub mod errors;
pub mod goals;
pub mod journal;
pub mod mindmap;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
