use utoipa::OpenApi;

/// Aggregated API documentation, served at `/api-docs/openapi.json`.
///
/// Each domain crate ships its own `ApiDoc`; this nests them under the
/// paths the router mounts them at.
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "DriftLab API",
        version = "0.1.0",
        description = "Drift event calendar: the public listing plus the admin surface for events and sources"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/events", api = domain_events::PublicApiDoc),
        (path = "/admin/events", api = domain_events::AdminApiDoc),
        (path = "/admin/sources", api = domain_sources::ApiDoc)
    )
)]
pub struct ApiDoc;
