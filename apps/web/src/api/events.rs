use axum::Router;
use domain_events::{EventService, PgEventRepository, handlers};

/// `/api/events` - the public calendar listing.
pub fn public_router(state: &crate::state::AppState) -> Router {
    let repository = PgEventRepository::new(state.db.clone());
    handlers::public_router(EventService::new(repository))
}

/// `/api/admin/events` - full event lifecycle for the admin panel.
pub fn admin_router(state: &crate::state::AppState) -> Router {
    let repository = PgEventRepository::new(state.db.clone());
    handlers::admin_router(EventService::new(repository))
}
