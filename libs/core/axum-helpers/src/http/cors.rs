use axum::http::Method;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// CORS layer restricted to a single allowed origin.
///
/// Allows the verbs the JSON surface uses (GET, POST, PUT, DELETE,
/// OPTIONS), Content-Type/Accept headers, and caches preflight results for
/// an hour.
pub fn create_cors_layer(allowed_origin: axum::http::HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// Permissive CORS layer for development.
///
/// Allows any origin; only use when no origin restriction is configured.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
