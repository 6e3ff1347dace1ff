//! Success envelopes shared by every JSON endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wrapper for successful responses: `{ "data": ... }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Body returned by delete operations: `{ "success": true }`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
