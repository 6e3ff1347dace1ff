use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found")]
    NotFound,

    #[error("Event ID is required")]
    MissingId,

    #[error("Failed to fetch events")]
    Fetch(#[source] DbErr),

    #[error("Failed to fetch event")]
    FetchOne(#[source] DbErr),

    #[error("Failed to create event")]
    Create(#[source] DbErr),

    #[error("Failed to update event")]
    Update(#[source] DbErr),

    #[error("Failed to delete event")]
    Delete(#[source] DbErr),
}

pub type EventResult<T> = Result<T, EventError>;

/// Convert EventError to AppError for standardized error responses.
///
/// Fetch failures keep the driver message out of the response body;
/// write failures pass it through as `details`.
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound => AppError::NotFound("Event not found".to_string()),
            EventError::MissingId => AppError::BadRequest("Event ID is required".to_string()),
            EventError::Fetch(e) => AppError::storage_opaque("Failed to fetch events", &e),
            EventError::FetchOne(e) => AppError::storage_opaque("Failed to fetch event", &e),
            EventError::Create(e) => AppError::storage("Failed to create event", &e),
            EventError::Update(e) => AppError::storage("Failed to update event", &e),
            EventError::Delete(e) => AppError::storage("Failed to delete event", &e),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
