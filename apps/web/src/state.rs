//! Application state management.
//!
//! The shared state passed to request handlers: configuration plus the
//! PostgreSQL connection pool. Cloned per handler (inexpensive pool
//! handle clones).

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
