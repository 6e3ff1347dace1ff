//! Handlers behind the page routes.
//!
//! Browser-facing counterparts to the JSON handlers: query params instead
//! of typed DTOs, form posts instead of JSON bodies, and redirects back to
//! `/admin` instead of status codes. Failed submissions re-render the form
//! with the submitted values and an error line instead of losing the input.

use std::sync::Arc;

use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_helpers::{AppError, UuidPath};
use domain_events::{EventError, EventFilter, repository::EventRepository};
use domain_sources::repository::SourceRepository;
use serde::Deserialize;
use uuid::Uuid;

use super::PagesState;
use super::forms::{EventFormData, manual_source};
use super::views::{AdminPage, FormPage, PublicPage};

/// Country and city filter picked on the public page. The selects submit
/// empty strings for "all", which normalize to no filter at all.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    country: Option<String>,
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    error: Option<String>,
}

/// The public calendar. A listing failure is logged and the page renders
/// empty rather than erroring out.
pub async fn public_index<E, S>(
    State(pages): State<Arc<PagesState<E, S>>>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, AppError>
where
    E: EventRepository,
    S: SourceRepository,
{
    let country = query.country.filter(|value| !value.is_empty());
    let city = query.city.filter(|value| !value.is_empty());

    let filter = EventFilter {
        country: country.clone(),
        city: city.clone(),
        ..EventFilter::default()
    };
    let events = match pages.events.list_public_events(filter).await {
        Ok(events) => events,
        Err(error) => {
            tracing::error!(%error, "Public listing failed, rendering an empty page");
            Vec::new()
        }
    };

    pages.render("public", &PublicPage::new(&events, country, city))
}

/// The admin table. `?error=` carries a message from a failed toggle or
/// delete redirect.
pub async fn admin_index<E, S>(
    State(pages): State<Arc<PagesState<E, S>>>,
    Query(query): Query<AdminQuery>,
) -> Result<Html<String>, AppError>
where
    E: EventRepository,
    S: SourceRepository,
{
    let events = match pages.events.list_admin_events().await {
        Ok(events) => events,
        Err(error) => {
            tracing::error!(%error, "Admin listing failed, rendering an empty page");
            Vec::new()
        }
    };

    pages.render("admin", &AdminPage::new(&events, query.error))
}

pub async fn new_event_form<E, S>(
    State(pages): State<Arc<PagesState<E, S>>>,
) -> Result<Html<String>, AppError>
where
    E: EventRepository,
    S: SourceRepository,
{
    pages.render("event_form", &FormPage::create(EventFormData::default(), None))
}

pub async fn create_event<E, S>(
    State(pages): State<Arc<PagesState<E, S>>>,
    Form(form): Form<EventFormData>,
) -> Result<Response, AppError>
where
    E: EventRepository,
    S: SourceRepository,
{
    let source_id = resolve_source(&pages, &form).await;

    let parsed = match form.parse() {
        Ok(parsed) => parsed,
        Err(message) => {
            return pages
                .render("event_form", &FormPage::create(form, Some(message)))
                .map(IntoResponse::into_response);
        }
    };

    match pages.events.create_event(parsed.into_create(source_id)).await {
        Ok(event) => {
            tracing::info!(id = %event.id, "Created event from the admin form");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(error) => {
            tracing::error!(%error, "Event creation from the admin form failed");
            pages
                .render("event_form", &FormPage::create(form, Some(describe(&error))))
                .map(IntoResponse::into_response)
        }
    }
}

pub async fn edit_event_form<E, S>(
    State(pages): State<Arc<PagesState<E, S>>>,
    UuidPath(id): UuidPath,
) -> Result<Html<String>, AppError>
where
    E: EventRepository,
    S: SourceRepository,
{
    match pages.events.get_event(id).await {
        Ok(event) => pages.render(
            "event_form",
            &FormPage::edit(id, EventFormData::from(&event), None),
        ),
        Err(EventError::NotFound) => pages.render("event_form", &FormPage::missing()),
        Err(error) => {
            tracing::error!(%id, %error, "Loading the event for editing failed");
            pages.render("event_form", &FormPage::missing())
        }
    }
}

pub async fn update_event<E, S>(
    State(pages): State<Arc<PagesState<E, S>>>,
    UuidPath(id): UuidPath,
    Form(form): Form<EventFormData>,
) -> Result<Response, AppError>
where
    E: EventRepository,
    S: SourceRepository,
{
    let source_id = resolve_source(&pages, &form).await;

    let parsed = match form.parse() {
        Ok(parsed) => parsed,
        Err(message) => {
            return pages
                .render("event_form", &FormPage::edit(id, form, Some(message)))
                .map(IntoResponse::into_response);
        }
    };

    match pages.events.update_event(id, parsed.into_update(source_id)).await {
        Ok(event) => {
            tracing::info!(id = %event.id, "Updated event from the admin form");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(error) => {
            tracing::error!(%id, %error, "Event update from the admin form failed");
            pages
                .render("event_form", &FormPage::edit(id, form, Some(describe(&error))))
                .map(IntoResponse::into_response)
        }
    }
}

/// Flip the active flag and bounce back to the table. Failures carry a
/// message via the `?error=` query so the admin page can show a banner.
pub async fn toggle_event<E, S>(
    State(pages): State<Arc<PagesState<E, S>>>,
    UuidPath(id): UuidPath,
) -> Redirect
where
    E: EventRepository,
    S: SourceRepository,
{
    match pages.events.toggle_event(id).await {
        Ok(event) => {
            tracing::info!(id = %event.id, is_active = event.is_active, "Toggled event visibility");
            Redirect::to("/admin")
        }
        Err(error) => {
            tracing::error!(%id, %error, "Toggle from the admin panel failed");
            Redirect::to("/admin?error=Failed%20to%20update%20event")
        }
    }
}

pub async fn delete_event<E, S>(
    State(pages): State<Arc<PagesState<E, S>>>,
    UuidPath(id): UuidPath,
) -> Redirect
where
    E: EventRepository,
    S: SourceRepository,
{
    match pages.events.delete_event(id).await {
        Ok(()) => {
            tracing::info!(%id, "Deleted event from the admin panel");
            Redirect::to("/admin")
        }
        Err(error) => {
            tracing::error!(%id, %error, "Delete from the admin panel failed");
            Redirect::to("/admin?error=Failed%20to%20delete%20event")
        }
    }
}

/// Resolve the submission's source before the rest of the payload is
/// validated. An existing id wins; otherwise a non-blank source name
/// creates a manual-entry source. Creation failures are non-fatal, the
/// event just saves without one.
async fn resolve_source<E, S>(pages: &PagesState<E, S>, form: &EventFormData) -> Option<Uuid>
where
    E: EventRepository,
    S: SourceRepository,
{
    let existing = form.source_id.trim();
    if !existing.is_empty() {
        return Uuid::parse_str(existing).ok();
    }

    let name = form.source_name.trim();
    if name.is_empty() {
        return None;
    }

    match pages.sources.create_source(manual_source(name.to_string())).await {
        Ok(source) => Some(source.id),
        Err(error) => {
            tracing::warn!(%error, "Source creation failed, saving the event without one");
            None
        }
    }
}

/// Error line for the form banner: the operation summary, plus the driver
/// detail when there is one.
fn describe(error: &EventError) -> String {
    match std::error::Error::source(error) {
        Some(source) => format!("{error} - {source}"),
        None => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{HeaderMap, Request, StatusCode, header},
    };
    use domain_events::{EventService, repository::InMemoryEventRepository};
    use domain_sources::{SourceService, repository::InMemorySourceRepository};
    use http_body_util::BodyExt;
    use test_utils::fixtures;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::pages::PagesState;

    fn page_router() -> (
        Router,
        EventService<InMemoryEventRepository>,
        SourceService<InMemorySourceRepository>,
    ) {
        let source_repo = InMemorySourceRepository::new();
        let event_repo = InMemoryEventRepository::with_sources(source_repo.clone());
        let events = EventService::new(event_repo);
        let sources = SourceService::new(source_repo);

        let state =
            PagesState::new(events.clone(), sources.clone()).expect("templates compile");
        (crate::pages::router(state), events, sources)
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
        let response = router.clone().oneshot(request).await.unwrap();
        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        (
            parts.status,
            parts.headers,
            String::from_utf8(bytes.to_vec()).unwrap(),
        )
    }

    fn get_page(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    // The values in these tests only need spaces escaped.
    fn form_body(pairs: &[(&str, &str)]) -> String {
        pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", value.replace(' ', "+")))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn zandvoort_form() -> Vec<(&'static str, &'static str)> {
        vec![
            ("source_name", "Manual Entry"),
            ("name", "Drift GP Zandvoort"),
            ("event_date", "2025-06-01T10:00"),
            ("location", "Circuit Zandvoort, Zandvoort, Netherlands"),
            ("city", "Zandvoort"),
            ("country", "Netherlands"),
            ("event_type", "Drift Event"),
            ("price", "From 25 EUR"),
            ("is_active", "on"),
        ]
    }

    #[tokio::test]
    async fn test_public_page_lists_active_events() {
        let (router, events, _) = page_router();
        events
            .create_event(fixtures::drift_event(
                "Visible Round",
                "Zandvoort",
                "Netherlands",
                "2025-06-01T10:00",
            ))
            .await
            .unwrap();
        let hidden = events
            .create_event(fixtures::drift_event(
                "Hidden Round",
                "Assen",
                "Netherlands",
                "2025-07-01T10:00",
            ))
            .await
            .unwrap();
        events.toggle_event(hidden.id).await.unwrap();

        let (status, _, body) = send(&router, get_page("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("🧪 DriftLab"));
        assert!(body.contains("Drift Events (1)"));
        assert!(body.contains("Visible Round"));
        assert!(!body.contains("Hidden Round"));
    }

    #[tokio::test]
    async fn test_public_page_shows_the_empty_state() {
        let (router, _, _) = page_router();

        let (status, _, body) = send(&router, get_page("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No events found"));
        assert!(body.contains("Add your first event"));
    }

    #[tokio::test]
    async fn test_country_filter_narrows_events_and_city_options() {
        let (router, events, _) = page_router();
        events
            .create_event(fixtures::drift_event(
                "Round NL",
                "Zandvoort",
                "Netherlands",
                "2025-06-01T10:00",
            ))
            .await
            .unwrap();
        events
            .create_event(fixtures::drift_event(
                "Round DE",
                "Nurburg",
                "Germany",
                "2025-06-08T10:00",
            ))
            .await
            .unwrap();

        let (status, _, body) = send(&router, get_page("/?country=Netherlands&city=")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Drift Events (1)"));
        assert!(body.contains("Round NL"));
        assert!(!body.contains("Round DE"));
        assert!(body.contains(r#"value="Netherlands" selected"#));
        assert!(body.contains(r#"value="Zandvoort""#));
        assert!(!body.contains("Nurburg"));
    }

    #[tokio::test]
    async fn test_city_select_stays_disabled_until_a_country_is_picked() {
        let (router, events, _) = page_router();
        events
            .create_event(fixtures::drift_event(
                "Round NL",
                "Zandvoort",
                "Netherlands",
                "2025-06-01T10:00",
            ))
            .await
            .unwrap();

        let (_, _, body) = send(&router, get_page("/")).await;
        assert!(body.contains(" disabled>"));

        let (_, _, body) = send(&router, get_page("/?country=Netherlands")).await;
        assert!(!body.contains(" disabled>"));
    }

    #[tokio::test]
    async fn test_admin_page_lists_every_event_newest_first() {
        let (router, events, _) = page_router();
        events
            .create_event(fixtures::drift_event(
                "First Round",
                "Zandvoort",
                "Netherlands",
                "2025-06-01T10:00",
            ))
            .await
            .unwrap();
        let second = events
            .create_event(fixtures::drift_event(
                "Second Round",
                "Assen",
                "Netherlands",
                "2025-07-01T10:00",
            ))
            .await
            .unwrap();
        events.toggle_event(second.id).await.unwrap();

        let (status, _, body) = send(&router, get_page("/admin")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("All Events (2)"));
        assert!(body.contains("Inactive"));
        let second_at = body.find("Second Round").unwrap();
        let first_at = body.find("First Round").unwrap();
        assert!(second_at < first_at);
    }

    #[tokio::test]
    async fn test_admin_page_shows_the_error_banner_from_the_query() {
        let (router, _, _) = page_router();

        let (_, _, body) =
            send(&router, get_page("/admin?error=Failed%20to%20update%20event")).await;
        assert!(body.contains("Failed to update event"));
    }

    #[tokio::test]
    async fn test_new_event_form_renders_defaults() {
        let (router, _, _) = page_router();

        let (status, _, body) = send(&router, get_page("/admin/events/new")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Create New Event"));
        assert!(body.contains(r#"value="Manual Entry""#));
        assert!(body.contains(r#"value="Netherlands" selected"#));
        assert!(body.contains(r#"value="Drift Event" selected"#));
        assert!(body.contains("checked"));
    }

    #[tokio::test]
    async fn test_creating_an_event_also_creates_the_manual_source() {
        let (router, events, sources) = page_router();

        let (status, headers, _) = send(
            &router,
            post_form("/admin/events/new", form_body(&zandvoort_form())),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/admin");

        let listed = events.list_admin_events().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].event.name, "Drift GP Zandvoort");
        assert_eq!(listed[0].event.price.as_deref(), Some("From 25 EUR"));

        let sources = sources.list_sources().await.unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "Manual Entry");
        assert_eq!(sources[0].url.as_deref(), Some("https://manual"));
        assert_eq!(listed[0].event.source_id, Some(sources[0].id));
    }

    #[tokio::test]
    async fn test_blank_source_name_skips_source_creation() {
        let (router, events, sources) = page_router();

        let mut pairs = zandvoort_form();
        pairs.retain(|(key, _)| *key != "source_name");
        let (status, _, _) = send(
            &router,
            post_form("/admin/events/new", form_body(&pairs)),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let listed = events.list_admin_events().await.unwrap();
        assert_eq!(listed[0].event.source_id, None);
        assert!(sources.list_sources().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_latitude_rerenders_with_the_values_kept() {
        let (router, events, sources) = page_router();

        let mut pairs = zandvoort_form();
        pairs.push(("latitude", "not-a-number"));
        let (status, _, body) = send(
            &router,
            post_form("/admin/events/new", form_body(&pairs)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Invalid latitude"));
        assert!(body.contains(r#"value="Drift GP Zandvoort""#));
        assert!(body.contains(r#"value="not-a-number""#));

        assert!(events.list_admin_events().await.unwrap().is_empty());
        // The source is created before validation, like the form always did.
        assert_eq!(sources.list_sources().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_form_prefills_the_stored_event() {
        let (router, events, _) = page_router();
        let event = events
            .create_event(fixtures::drift_event(
                "Drift GP",
                "Zandvoort",
                "Netherlands",
                "2025-06-01T10:00",
            ))
            .await
            .unwrap();

        let (status, _, body) =
            send(&router, get_page(&format!("/admin/events/{}/edit", event.id))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Edit Event"));
        assert!(body.contains(r#"value="Drift GP""#));
        assert!(body.contains(r#"value="2025-06-01T10:00""#));
        assert!(body.contains(&format!("/admin/events/{}/edit", event.id)));
    }

    #[tokio::test]
    async fn test_edit_form_for_an_unknown_id_says_not_found() {
        let (router, _, _) = page_router();

        let (status, _, body) = send(
            &router,
            get_page(&format!("/admin/events/{}/edit", Uuid::now_v7())),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Event not found"));
        assert!(body.contains("Back to Admin"));
    }

    #[tokio::test]
    async fn test_updating_clears_blanked_fields() {
        let (router, events, _) = page_router();
        let mut input =
            fixtures::drift_event("Drift GP", "Zandvoort", "Netherlands", "2025-06-01T10:00");
        input.description = Some("Round 1 of the championship".to_string());
        let event = events.create_event(input).await.unwrap();

        let mut pairs = zandvoort_form();
        pairs.retain(|(key, _)| *key != "name");
        pairs.push(("name", "Renamed Round"));
        let (status, headers, _) = send(
            &router,
            post_form(
                &format!("/admin/events/{}/edit", event.id),
                form_body(&pairs),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/admin");

        let stored = events.get_event(event.id).await.unwrap();
        assert_eq!(stored.name, "Renamed Round");
        assert_eq!(stored.description, None);
    }

    #[tokio::test]
    async fn test_toggling_flips_visibility() {
        let (router, events, _) = page_router();
        let event = events
            .create_event(fixtures::drift_event(
                "Drift GP",
                "Zandvoort",
                "Netherlands",
                "2025-06-01T10:00",
            ))
            .await
            .unwrap();
        assert!(event.is_active);

        let uri = format!("/admin/events/{}/toggle", event.id);
        let (status, headers, _) = send(&router, post_form(&uri, String::new())).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/admin");
        assert!(!events.get_event(event.id).await.unwrap().is_active);

        send(&router, post_form(&uri, String::new())).await;
        assert!(events.get_event(event.id).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_toggle_failure_redirects_with_the_error_banner() {
        let (router, _, _) = page_router();

        let (status, headers, _) = send(
            &router,
            post_form(
                &format!("/admin/events/{}/toggle", Uuid::now_v7()),
                String::new(),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(
            headers[header::LOCATION],
            "/admin?error=Failed%20to%20update%20event"
        );
    }

    #[tokio::test]
    async fn test_deleting_removes_the_event() {
        let (router, events, _) = page_router();
        let event = events
            .create_event(fixtures::drift_event(
                "Doomed Round",
                "Assen",
                "Netherlands",
                "2025-06-02T10:00",
            ))
            .await
            .unwrap();

        let (status, headers, _) = send(
            &router,
            post_form(&format!("/admin/events/{}/delete", event.id), String::new()),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/admin");

        assert!(events.list_admin_events().await.unwrap().is_empty());
        let (_, _, body) = send(&router, get_page("/admin")).await;
        assert!(body.contains("No events yet"));
    }
}
