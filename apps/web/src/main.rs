use std::time::Duration;

use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::run_migrations;
use domain_events::{EventService, PgEventRepository};
use domain_sources::{PgSourceRepository, SourceService};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod pages;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    run_migrations::<Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

    let state = AppState { config, db };

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // Server-rendered pages share the connection pool with the API
    let pages_state = pages::PagesState::new(
        EventService::new(PgEventRepository::new(state.db.clone())),
        SourceService::new(PgSourceRepository::new(state.db.clone())),
    )
    .map_err(|e| eyre::eyre!("Template registration failed: {}", e))?;
    let page_routes = pages::router(pages_state);

    // CORS: a configured origin restricts the API surface, otherwise the
    // development default is permissive
    let cors = match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origin) => {
            let origin = origin
                .parse()
                .map_err(|e| eyre::eyre!("Invalid CORS_ALLOWED_ORIGIN: {}", e))?;
            axum_helpers::create_cors_layer(origin)
        }
        Err(_) => axum_helpers::create_permissive_cors_layer(),
    };

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes, page_routes, cors);

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check with an actual database ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        "Starting {} with production-ready shutdown (30s timeout)",
        state.config.app.name
    );

    // Production-ready server with graceful shutdown and cleanup
    // State moves here for cleanup
    let server_config = state.config.server.clone();
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30), // 30s graceful shutdown timeout
        async move {
            info!("Shutting down: closing database connections");
            close_postgres(state.db, "driftlab").await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("DriftLab shutdown complete");
    Ok(())
}
