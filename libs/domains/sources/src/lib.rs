//! Sources Domain
//!
//! Provenance records for drift events: each source describes where event
//! data came from (manual entry or a scraper). Sources are created and
//! listed; they are never mutated afterwards.
//!
//! Layering follows the usual shape: handlers over a service over a
//! repository trait with in-memory and PostgreSQL implementations.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_sources::{handlers, repository::InMemorySourceRepository, service::SourceService};
//!
//! let repository = InMemorySourceRepository::new();
//! let service = SourceService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{SourceError, SourceResult};
pub use handlers::ApiDoc;
pub use models::{CreateSource, Source};
pub use postgres::PgSourceRepository;
pub use repository::{InMemorySourceRepository, SourceRepository};
pub use service::SourceService;
