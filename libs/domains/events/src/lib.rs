//! Events Domain
//!
//! Drift event calendar entries: the public listing serves active events
//! joined with their sources, filtered by country and city; the admin
//! surface manages the full lifecycle (create, update, toggle, delete).
//!
//! Layering follows the usual shape: handlers over a service over a
//! repository trait with in-memory and PostgreSQL implementations.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_events::{handlers, repository::InMemoryEventRepository, service::EventService};
//!
//! let repository = InMemoryEventRepository::new();
//!
//! let public = handlers::public_router(EventService::new(repository.clone()));
//! let admin = handlers::admin_router(EventService::new(repository));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{EventError, EventResult};
pub use handlers::{AdminApiDoc, PublicApiDoc};
pub use models::{
    CreateEvent, Event, EventFilter, EventWithSource, SortKey, SortOrder, UpdateEvent,
    UpdateEventRequest, parse_flexible_datetime,
};
pub use postgres::PgEventRepository;
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;
