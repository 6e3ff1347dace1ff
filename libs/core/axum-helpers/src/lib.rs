//! # Axum Helpers
//!
//! Shared plumbing for the web surface: structured error responses,
//! rejection-mapping extractors, HTTP middleware, and server bootstrap with
//! graceful shutdown.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` and the `{ error, details? }` response body
//! - **[`extractors`]**: JSON/query/path extractors that keep malformed
//!   input inside the JSON error envelope
//! - **[`http`]**: CORS and security-header middleware
//! - **[`server`]**: router assembly, health endpoints, shutdown coordination

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, DataResponse, DeleteResponse, ErrorResponse};

pub use extractors::{ApiJson, ApiQuery, UuidPath};

pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_postgres, create_app,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};
