use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use axum_helpers::{ApiJson, ApiQuery, DataResponse, DeleteResponse, ErrorResponse, UuidPath};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{EventError, EventResult};
use crate::models::{
    CreateEvent, DeleteEventParams, Event, EventFilter, EventWithSource, UpdateEvent,
    UpdateEventRequest,
};
use crate::repository::EventRepository;
use crate::service::EventService;

/// OpenAPI documentation for the public events API
#[derive(OpenApi)]
#[openapi(
    paths(list_public_events),
    components(schemas(Event, EventWithSource)),
    tags((name = "events", description = "Public drift event calendar"))
)]
pub struct PublicApiDoc;

/// OpenAPI documentation for the admin events API
#[derive(OpenApi)]
#[openapi(
    paths(list_admin_events, get_event, create_event, update_event, delete_event),
    components(schemas(Event, EventWithSource, CreateEvent, UpdateEvent, UpdateEventRequest)),
    tags((name = "admin-events", description = "Event management endpoints"))
)]
pub struct AdminApiDoc;

/// Create the public events router
pub fn public_router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_public_events))
        .with_state(shared_service)
}

/// Create the admin events router
pub fn admin_router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_admin_events)
                .post(create_event)
                .put(update_event)
                .delete(delete_event),
        )
        .route("/{id}", get(get_event))
        .with_state(shared_service)
}

/// List active events with their sources, filtered and sorted
#[utoipa::path(
    get,
    path = "",
    tag = "events",
    params(EventFilter),
    responses(
        (status = 200, description = "Active events matching the filter", body = DataResponse<Vec<EventWithSource>>),
        (status = 400, description = "Unknown sort column or direction", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_public_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    ApiQuery(filter): ApiQuery<EventFilter>,
) -> EventResult<Json<DataResponse<Vec<EventWithSource>>>> {
    let events = service.list_public_events(filter).await?;
    Ok(Json(DataResponse::new(events)))
}

/// List every event with its source, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "admin-events",
    responses(
        (status = 200, description = "All events, active or not", body = DataResponse<Vec<EventWithSource>>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_admin_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
) -> EventResult<Json<DataResponse<Vec<EventWithSource>>>> {
    let events = service.list_admin_events().await?;
    Ok(Json(DataResponse::new(events)))
}

/// Get a single event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "admin-events",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event", body = DataResponse<Event>),
        (status = 400, description = "Malformed UUID", body = ErrorResponse),
        (status = 404, description = "No event with that ID", body = ErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
) -> EventResult<Json<DataResponse<Event>>> {
    let event = service.get_event(id).await?;
    Ok(Json(DataResponse::new(event)))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "",
    tag = "admin-events",
    request_body = CreateEvent,
    responses(
        (status = 200, description = "Event created", body = DataResponse<Event>),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    ApiJson(input): ApiJson<CreateEvent>,
) -> EventResult<Json<DataResponse<Event>>> {
    let event = service.create_event(input).await?;
    Ok(Json(DataResponse::new(event)))
}

/// Update an event; the target id rides in the body
#[utoipa::path(
    put,
    path = "",
    tag = "admin-events",
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated event", body = DataResponse<Event>),
        (status = 400, description = "Missing id or malformed body", body = ErrorResponse),
        (status = 404, description = "No event with that ID", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    ApiJson(request): ApiJson<UpdateEventRequest>,
) -> EventResult<Json<DataResponse<Event>>> {
    let id = request.id.ok_or(EventError::MissingId)?;
    let event = service.update_event(id, request.changes).await?;
    Ok(Json(DataResponse::new(event)))
}

/// Delete an event addressed by the `id` query parameter
#[utoipa::path(
    delete,
    path = "",
    tag = "admin-events",
    params(DeleteEventParams),
    responses(
        (status = 200, description = "Event deleted (or already gone)", body = DeleteResponse),
        (status = 400, description = "Missing or malformed id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn delete_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    ApiQuery(params): ApiQuery<DeleteEventParams>,
) -> EventResult<Json<DeleteResponse>> {
    let id = params.id.ok_or(EventError::MissingId)?;
    service.delete_event(id).await?;
    Ok(Json(DeleteResponse::ok()))
}
