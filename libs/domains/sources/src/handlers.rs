use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{ApiJson, DataResponse, ErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::SourceResult;
use crate::models::{CreateSource, Source};
use crate::repository::SourceRepository;
use crate::service::SourceService;

/// OpenAPI documentation for the sources API
#[derive(OpenApi)]
#[openapi(
    paths(list_sources, create_source),
    components(schemas(Source, CreateSource)),
    tags((name = "sources", description = "Event source provenance endpoints"))
)]
pub struct ApiDoc;

/// Create the sources router
pub fn router<R: SourceRepository + 'static>(service: SourceService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_sources).post(create_source))
        .with_state(shared_service)
}

/// List all sources, ordered by name
#[utoipa::path(
    get,
    path = "",
    tag = "sources",
    responses(
        (status = 200, description = "All sources", body = DataResponse<Vec<Source>>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_sources<R: SourceRepository>(
    State(service): State<Arc<SourceService<R>>>,
) -> SourceResult<Json<DataResponse<Vec<Source>>>> {
    let sources = service.list_sources().await?;
    Ok(Json(DataResponse::new(sources)))
}

/// Create a new source
#[utoipa::path(
    post,
    path = "",
    tag = "sources",
    request_body = CreateSource,
    responses(
        (status = 200, description = "Source created", body = DataResponse<Source>),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_source<R: SourceRepository>(
    State(service): State<Arc<SourceService<R>>>,
    ApiJson(input): ApiJson<CreateSource>,
) -> SourceResult<Json<DataResponse<Source>>> {
    let source = service.create_source(input).await?;
    Ok(Json(DataResponse::new(source)))
}
