use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to fetch sources")]
    Fetch(#[source] DbErr),

    #[error("Failed to create source")]
    Create(#[source] DbErr),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Convert SourceError to AppError for standardized error responses.
///
/// Fetch failures keep the driver message out of the response body;
/// create failures pass it through as `details`.
impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Fetch(e) => AppError::storage_opaque("Failed to fetch sources", &e),
            SourceError::Create(e) => AppError::storage("Failed to create source", &e),
        }
    }
}

impl IntoResponse for SourceError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
