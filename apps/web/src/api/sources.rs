use axum::Router;
use domain_sources::{PgSourceRepository, SourceService, handlers};

/// `/api/admin/sources` - provenance records for events.
pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgSourceRepository::new(state.db.clone());
    handlers::router(SourceService::new(repository))
}
