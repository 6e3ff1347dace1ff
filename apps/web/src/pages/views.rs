//! Template view models.
//!
//! Serializable contexts for the page templates, with all display
//! formatting (dates, counts, option lists) done here so the templates
//! stay plain.

use domain_events::{Event, EventWithSource};
use serde::Serialize;
use uuid::Uuid;

use super::forms::EventFormData;

/// Countries offered in the event form. A display list, not validated.
pub const COUNTRIES: [&str; 8] = [
    "Netherlands",
    "Germany",
    "Belgium",
    "France",
    "United Kingdom",
    "Spain",
    "Portugal",
    "Italy",
];

/// Event type tags offered in the form.
pub const EVENT_TYPES: [&str; 5] = [
    "Drift Event",
    "Championship",
    "Track Day",
    "Training",
    "Competition",
];

/// One card on the public listing.
#[derive(Debug, Serialize)]
pub struct PublicEventCard {
    pub day: String,
    pub month_year: String,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub country: String,
    pub venue: Option<String>,
    pub price: Option<String>,
    pub organizer: Option<String>,
    pub event_type: Option<String>,
}

impl From<&Event> for PublicEventCard {
    fn from(event: &Event) -> Self {
        Self {
            day: event.event_date.format("%-d").to_string(),
            month_year: event.event_date.format("%b %Y").to_string(),
            name: event.name.clone(),
            description: event.description.clone(),
            city: event.city.clone(),
            country: event.country.clone(),
            venue: event.venue.clone(),
            price: event.price.clone(),
            organizer: event.organizer.clone(),
            event_type: event.event_type.clone(),
        }
    }
}

/// Context for the public listing page.
///
/// The country and city option lists come from the fetched event set
/// itself, the same staleness the calendar has always had.
#[derive(Debug, Serialize)]
pub struct PublicPage {
    pub page_title: &'static str,
    pub count: usize,
    pub country: String,
    pub city: String,
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    pub events: Vec<PublicEventCard>,
}

impl PublicPage {
    pub fn new(
        events: &[EventWithSource],
        country: Option<String>,
        city: Option<String>,
    ) -> Self {
        let mut countries: Vec<String> =
            events.iter().map(|e| e.event.country.clone()).collect();
        countries.sort();
        countries.dedup();

        let mut cities: Vec<String> = events.iter().map(|e| e.event.city.clone()).collect();
        cities.sort();
        cities.dedup();

        Self {
            page_title: "DriftLab",
            count: events.len(),
            country: country.unwrap_or_default(),
            city: city.unwrap_or_default(),
            countries,
            cities,
            events: events
                .iter()
                .map(|e| PublicEventCard::from(&e.event))
                .collect(),
        }
    }
}

/// One row of the admin table.
#[derive(Debug, Serialize)]
pub struct AdminEventRow {
    pub id: Uuid,
    pub name: String,
    pub venue: Option<String>,
    pub date: String,
    pub city: String,
    pub country: String,
    pub price: Option<String>,
    pub is_active: bool,
}

impl From<&Event> for AdminEventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            venue: event.venue.clone(),
            date: event.event_date.format("%b %-d, %Y").to_string(),
            city: event.city.clone(),
            country: event.country.clone(),
            price: event.price.clone(),
            is_active: event.is_active,
        }
    }
}

/// Context for the admin listing page.
#[derive(Debug, Serialize)]
pub struct AdminPage {
    pub page_title: &'static str,
    pub count: usize,
    pub error: Option<String>,
    pub events: Vec<AdminEventRow>,
}

impl AdminPage {
    pub fn new(events: &[EventWithSource], error: Option<String>) -> Self {
        Self {
            page_title: "Admin Panel - DriftLab",
            count: events.len(),
            error,
            events: events
                .iter()
                .map(|e| AdminEventRow::from(&e.event))
                .collect(),
        }
    }
}

/// Context for the event form, covering create, edit and the not-found
/// state of a vanished edit target.
#[derive(Debug, Serialize)]
pub struct FormPage {
    pub page_title: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub action: String,
    pub missing: bool,
    pub error: Option<String>,
    pub form: EventFormData,
    pub countries: [&'static str; 8],
    pub event_types: [&'static str; 5],
}

impl FormPage {
    pub fn create(form: EventFormData, error: Option<String>) -> Self {
        Self {
            page_title: "Create New Event - DriftLab",
            title: "Create New Event",
            subtitle: "Add a drift event to the calendar",
            submit_label: "Create Event",
            action: "/admin/events/new".to_string(),
            missing: false,
            error,
            form,
            countries: COUNTRIES,
            event_types: EVENT_TYPES,
        }
    }

    pub fn edit(id: Uuid, form: EventFormData, error: Option<String>) -> Self {
        Self {
            page_title: "Edit Event - DriftLab",
            title: "Edit Event",
            subtitle: "Update event details",
            submit_label: "Update Event",
            action: format!("/admin/events/{id}/edit"),
            missing: false,
            error,
            form,
            countries: COUNTRIES,
            event_types: EVENT_TYPES,
        }
    }

    /// The edit page for an event that no longer exists.
    pub fn missing() -> Self {
        Self {
            page_title: "Edit Event - DriftLab",
            title: "Edit Event",
            subtitle: "Update event details",
            submit_label: "Update Event",
            action: String::new(),
            missing: true,
            error: None,
            form: EventFormData::default(),
            countries: COUNTRIES,
            event_types: EVENT_TYPES,
        }
    }
}
