//! Server-rendered pages.
//!
//! The public calendar, the admin panel, and the event form. Pages go
//! through the same services as the JSON API; the templates are compiled
//! into the binary and registered once at startup.

use std::sync::Arc;

use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use axum_helpers::AppError;
use domain_events::{EventService, repository::EventRepository};
use domain_sources::{SourceService, repository::SourceRepository};
use handlebars::{Handlebars, TemplateError, handlebars_helper};
use serde::Serialize;

pub mod forms;
pub mod handlers;
pub mod views;

/// Everything the page handlers need: the template registry plus the two
/// domain services. Shared behind an `Arc` in the router state.
pub struct PagesState<E: EventRepository, S: SourceRepository> {
    pub templates: Handlebars<'static>,
    pub events: EventService<E>,
    pub sources: SourceService<S>,
}

impl<E: EventRepository, S: SourceRepository> PagesState<E, S> {
    pub fn new(
        events: EventService<E>,
        sources: SourceService<S>,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            templates: registry()?,
            events,
            sources,
        })
    }

    /// Render a registered template to an HTML response.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, AppError> {
        self.templates
            .render(name, data)
            .map(Html)
            .map_err(|e| AppError::Internal(format!("Template '{name}' failed to render: {e}")))
    }
}

/// Template registry with every page template embedded at compile time.
/// `head` is pulled into the page templates as a partial.
fn registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();

    handlebars_helper!(stringeq: |s1: String, s2: String| s1.eq(&s2));
    handlebars.register_helper("stringeq", Box::new(stringeq));

    handlebars.register_template_string("head", include_str!("templates/head.hbs"))?;
    handlebars.register_template_string("public", include_str!("templates/public.hbs"))?;
    handlebars.register_template_string("admin", include_str!("templates/admin.hbs"))?;
    handlebars.register_template_string("event_form", include_str!("templates/event_form.hbs"))?;

    Ok(handlebars)
}

/// Page routes, mounted at the root next to the `/api` tree.
pub fn router<E, S>(state: PagesState<E, S>) -> Router
where
    E: EventRepository + 'static,
    S: SourceRepository + 'static,
{
    let state = Arc::new(state);

    Router::new()
        .route("/", get(handlers::public_index))
        .route("/admin", get(handlers::admin_index))
        .route(
            "/admin/events/new",
            get(handlers::new_event_form).post(handlers::create_event),
        )
        .route(
            "/admin/events/{id}/edit",
            get(handlers::edit_event_form).post(handlers::update_event),
        )
        .route("/admin/events/{id}/toggle", post(handlers::toggle_event))
        .route("/admin/events/{id}/delete", post(handlers::delete_event))
        .with_state(state)
}
