//! Custom extractors for Axum handlers.
//!
//! These wrap the stock axum extractors so that malformed input is rendered
//! with the same `{ error, details? }` body as every other failure, instead
//! of axum's plain-text rejections.

pub mod api_json;
pub mod api_query;
pub mod uuid_path;

pub use api_json::ApiJson;
pub use api_query::ApiQuery;
pub use uuid_path::UuidPath;
