//! Connection cleanup helpers for graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM PostgreSQL connection explicitly.
///
/// The pool would close on drop anyway; closing explicitly gives the
/// shutdown path a log line either way.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
