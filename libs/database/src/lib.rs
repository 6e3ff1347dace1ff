//! Database connection layer.
//!
//! Wraps SeaORM connection management for PostgreSQL: pool configuration
//! loaded from the environment, migration running, and a readiness probe.

pub mod error;
pub mod postgres;

pub use error::{DatabaseError, DatabaseResult};
