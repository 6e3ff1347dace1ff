//! Event form payload handling.
//!
//! HTML forms deliver every field as text and omit unchecked checkboxes
//! entirely. [`EventFormData`] is that raw shape, reused as the template
//! context so a failed submit re-renders with the typed values intact.
//! [`EventFormData::parse`] normalizes it the way the admin panel always
//! has: blanks become null, coordinates and timestamps are parsed, and
//! anything unparseable comes back as a form error.

use chrono::{DateTime, Utc};
use domain_events::{CreateEvent, Event, UpdateEvent, parse_flexible_datetime};
use domain_sources::CreateSource;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Raw event form submission, also the prefill shape for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFormData {
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_end_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub registration_url: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub external_id: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub is_active: bool,
}

/// A ticked checkbox submits some value; an unticked one submits nothing,
/// which `#[serde(default)]` turns into `false`.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer)?;
    Ok(true)
}

impl Default for EventFormData {
    /// The blank create form: source name, country and event type start
    /// on their usual picks, the event starts visible.
    fn default() -> Self {
        Self {
            source_id: String::new(),
            source_name: "Manual Entry".to_string(),
            name: String::new(),
            description: String::new(),
            event_date: String::new(),
            event_end_date: String::new(),
            location: String::new(),
            venue: String::new(),
            city: String::new(),
            country: "Netherlands".to_string(),
            latitude: String::new(),
            longitude: String::new(),
            registration_url: String::new(),
            price: String::new(),
            organizer: String::new(),
            event_type: "Drift Event".to_string(),
            track_name: String::new(),
            external_id: String::new(),
            is_active: true,
        }
    }
}

impl From<&Event> for EventFormData {
    /// Prefill for the edit form. Timestamps are reformatted to the
    /// `datetime-local` text shape and coordinates to plain decimals.
    fn from(event: &Event) -> Self {
        Self {
            source_id: event.source_id.map(|id| id.to_string()).unwrap_or_default(),
            source_name: "Manual Entry".to_string(),
            name: event.name.clone(),
            description: event.description.clone().unwrap_or_default(),
            event_date: event.event_date.format("%Y-%m-%dT%H:%M").to_string(),
            event_end_date: event
                .event_end_date
                .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
                .unwrap_or_default(),
            location: event.location.clone(),
            venue: event.venue.clone().unwrap_or_default(),
            city: event.city.clone(),
            country: event.country.clone(),
            latitude: event.latitude.map(|v| v.to_string()).unwrap_or_default(),
            longitude: event.longitude.map(|v| v.to_string()).unwrap_or_default(),
            registration_url: event.registration_url.clone().unwrap_or_default(),
            price: event.price.clone().unwrap_or_default(),
            organizer: event.organizer.clone().unwrap_or_default(),
            event_type: event.event_type.clone().unwrap_or_default(),
            track_name: event.track_name.clone().unwrap_or_default(),
            external_id: event.external_id.clone().unwrap_or_default(),
            is_active: event.is_active,
        }
    }
}

/// Form fields after normalization: blanks dropped, coordinates and
/// timestamps parsed into their real types.
#[derive(Debug, Clone)]
pub struct ParsedEventForm {
    pub source_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub venue: Option<String>,
    pub city: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub registration_url: Option<String>,
    pub price: Option<String>,
    pub organizer: Option<String>,
    pub event_type: Option<String>,
    pub track_name: Option<String>,
    pub external_id: Option<String>,
    pub is_active: bool,
}

impl EventFormData {
    /// Normalize the submitted text fields.
    ///
    /// Any error message returned here goes straight onto the re-rendered
    /// form, so it names the offending field and value.
    pub fn parse(&self) -> Result<ParsedEventForm, String> {
        let event_date = match self.event_date.trim() {
            "" => return Err("Event date is required".to_string()),
            value => parse_flexible_datetime(value)?,
        };
        let event_end_date = match self.event_end_date.trim() {
            "" => None,
            value => Some(parse_flexible_datetime(value)?),
        };

        let source_id = match self.source_id.trim() {
            "" => None,
            value => Some(
                Uuid::parse_str(value).map_err(|_| format!("Invalid source id '{value}'"))?,
            ),
        };

        Ok(ParsedEventForm {
            source_id,
            name: self.name.trim().to_string(),
            description: blank_to_none(&self.description),
            event_date,
            event_end_date,
            location: self.location.trim().to_string(),
            venue: blank_to_none(&self.venue),
            city: self.city.trim().to_string(),
            country: self.country.trim().to_string(),
            latitude: parse_coordinate("latitude", &self.latitude)?,
            longitude: parse_coordinate("longitude", &self.longitude)?,
            registration_url: blank_to_none(&self.registration_url),
            price: blank_to_none(&self.price),
            organizer: blank_to_none(&self.organizer),
            event_type: blank_to_none(&self.event_type),
            track_name: blank_to_none(&self.track_name),
            external_id: blank_to_none(&self.external_id),
            is_active: self.is_active,
        })
    }
}

impl ParsedEventForm {
    /// Assemble the create payload. The form's own source id wins;
    /// otherwise the handler's resolved id (possibly freshly created
    /// from the source-name field) is attached.
    pub fn into_create(self, resolved_source: Option<Uuid>) -> CreateEvent {
        CreateEvent {
            source_id: self.source_id.or(resolved_source),
            name: self.name,
            description: self.description,
            event_date: self.event_date,
            event_end_date: self.event_end_date,
            location: self.location,
            venue: self.venue,
            city: self.city,
            country: self.country,
            latitude: self.latitude,
            longitude: self.longitude,
            registration_url: self.registration_url,
            price: self.price,
            organizer: self.organizer,
            event_type: self.event_type,
            track_name: self.track_name,
            external_id: self.external_id,
            is_active: self.is_active,
        }
    }

    /// Assemble the update payload. The form always submits the whole
    /// row, so every column is written: blanked optional fields become
    /// explicit nulls and clear the stored value.
    pub fn into_update(self, resolved_source: Option<Uuid>) -> UpdateEvent {
        UpdateEvent {
            source_id: Some(self.source_id.or(resolved_source)),
            name: Some(self.name),
            description: Some(self.description),
            event_date: Some(self.event_date),
            event_end_date: Some(self.event_end_date),
            location: Some(self.location),
            venue: Some(self.venue),
            city: Some(self.city),
            country: Some(self.country),
            latitude: Some(self.latitude),
            longitude: Some(self.longitude),
            registration_url: Some(self.registration_url),
            price: Some(self.price),
            organizer: Some(self.organizer),
            event_type: Some(self.event_type),
            track_name: Some(self.track_name),
            external_id: Some(self.external_id),
            is_active: Some(self.is_active),
        }
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a coordinate text field. Blank means absent; anything that is
/// not a finite number is rejected so NaN and infinity never reach
/// storage.
fn parse_coordinate(label: &str, value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
        _ => Err(format!("Invalid {label}: '{trimmed}' is not a number")),
    }
}

/// Fixed metadata for sources created from the form's source-name field.
pub fn manual_source(name: String) -> CreateSource {
    CreateSource {
        name,
        url: Some("https://manual".to_string()),
        scraper_type: Some("manual".to_string()),
        scraper_config: serde_json::json!({}),
        country_filter: ["Netherlands", "Germany", "Belgium", "France"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        is_active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn filled_form() -> EventFormData {
        EventFormData {
            name: "Drift GP Zandvoort".to_string(),
            event_date: "2025-06-01T10:00".to_string(),
            location: "Circuit Zandvoort".to_string(),
            city: "Zandvoort".to_string(),
            country: "Netherlands".to_string(),
            ..EventFormData::default()
        }
    }

    #[test]
    fn blank_form_starts_with_the_usual_picks() {
        let form = EventFormData::default();
        assert_eq!(form.source_name, "Manual Entry");
        assert_eq!(form.country, "Netherlands");
        assert_eq!(form.event_type, "Drift Event");
        assert!(form.is_active);
    }

    #[test]
    fn checkbox_absent_means_unchecked() {
        let form: EventFormData = serde_json::from_value(json!({ "name": "x" })).unwrap();
        assert!(!form.is_active);

        let form: EventFormData =
            serde_json::from_value(json!({ "name": "x", "is_active": "on" })).unwrap();
        assert!(form.is_active);
    }

    #[test]
    fn parse_requires_an_event_date() {
        let mut form = filled_form();
        form.event_date = String::new();

        let err = form.parse().unwrap_err();
        assert_eq!(err, "Event date is required");
    }

    #[test]
    fn parse_reads_datetime_local_as_utc() {
        let parsed = filled_form().parse().unwrap();
        assert_eq!(
            parsed.event_date,
            Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
        );
        assert!(parsed.event_end_date.is_none());
    }

    #[test]
    fn parse_turns_blanks_into_none() {
        let mut form = filled_form();
        form.description = "   ".to_string();
        form.price = "25 EUR".to_string();

        let parsed = form.parse().unwrap();
        assert_eq!(parsed.description, None);
        assert_eq!(parsed.price.as_deref(), Some("25 EUR"));
    }

    #[test]
    fn parse_rejects_text_coordinates() {
        let mut form = filled_form();
        form.latitude = "somewhere north".to_string();

        let err = form.parse().unwrap_err();
        assert!(err.contains("latitude"));
        assert!(err.contains("somewhere north"));
    }

    #[test]
    fn parse_rejects_non_finite_coordinates() {
        for value in ["NaN", "inf", "-inf"] {
            let mut form = filled_form();
            form.longitude = value.to_string();
            assert!(form.parse().is_err(), "{value} should be rejected");
        }
    }

    #[test]
    fn parse_accepts_decimal_coordinates() {
        let mut form = filled_form();
        form.latitude = "52.3888".to_string();
        form.longitude = "4.5403".to_string();

        let parsed = form.parse().unwrap();
        assert_eq!(parsed.latitude, Some(52.3888));
        assert_eq!(parsed.longitude, Some(4.5403));
    }

    #[test]
    fn prefill_reformats_timestamps_and_coordinates() {
        let mut event = Event::new(
            serde_json::from_value(json!({
                "name": "Drift GP Zandvoort",
                "event_date": "2025-06-01T10:00",
                "location": "Circuit Zandvoort",
                "city": "Zandvoort",
                "country": "Netherlands",
                "latitude": 52.3888
            }))
            .unwrap(),
        );
        event.event_end_date = Some(Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap());

        let form = EventFormData::from(&event);
        assert_eq!(form.event_date, "2025-06-01T10:00");
        assert_eq!(form.event_end_date, "2025-06-01T18:30");
        assert_eq!(form.latitude, "52.3888");
        assert_eq!(form.longitude, "");
        assert_eq!(form.source_name, "Manual Entry");
    }

    #[test]
    fn the_forms_own_source_id_wins_over_a_resolved_one() {
        let mut form = filled_form();
        let kept = Uuid::new_v4();
        form.source_id = kept.to_string();

        let create = form.parse().unwrap().into_create(Some(Uuid::new_v4()));
        assert_eq!(create.source_id, Some(kept));
    }

    #[test]
    fn update_payload_writes_blanks_as_explicit_nulls() {
        let mut form = filled_form();
        form.description = String::new();

        let update = form.parse().unwrap().into_update(None);
        assert_eq!(update.description, Some(None));
        assert_eq!(update.name.as_deref(), Some("Drift GP Zandvoort"));
        assert_eq!(update.is_active, Some(true));
        assert_eq!(update.source_id, Some(None));
    }

    #[test]
    fn manual_source_carries_the_fixed_metadata() {
        let source = manual_source("Manual Entry".to_string());
        assert_eq!(source.url.as_deref(), Some("https://manual"));
        assert_eq!(source.scraper_type.as_deref(), Some("manual"));
        assert_eq!(source.scraper_config, json!({}));
        assert_eq!(
            source.country_filter,
            vec!["Netherlands", "Germany", "Belgium", "France"]
        );
        assert!(source.is_active);
    }
}
