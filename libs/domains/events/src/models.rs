use chrono::{DateTime, NaiveDateTime, Utc};
use domain_sources::Source;
use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Parse a timestamp from either RFC 3339 or the `datetime-local` shape
/// (`YYYY-MM-DDTHH:MM`, optionally with seconds). Naive values are taken
/// as UTC.
pub fn parse_flexible_datetime(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!(
        "invalid timestamp '{value}': expected RFC 3339 or YYYY-MM-DDTHH:MM"
    ))
}

mod flexible_datetime {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_flexible_datetime(&value).map_err(serde::de::Error::custom)
    }
}

mod flexible_datetime_opt {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|s| parse_flexible_datetime(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

mod flexible_datetime_double_opt {
    use super::*;

    /// Absent means untouched (handled by `#[serde(default)]`), explicit
    /// null clears the stored value.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            None => Ok(Some(None)),
            Some(s) => parse_flexible_datetime(&s)
                .map(|dt| Some(Some(dt)))
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Distinguishes an absent field from an explicit null in update payloads.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Filter selects submit empty strings for "all"; treat them as no filter
/// rather than a literal `= ''` match.
fn blank_filter<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Column the public listing is sorted by
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortKey {
    #[default]
    EventDate,
    Name,
    City,
    Country,
    CreatedAt,
}

/// Sort direction for the public listing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Drift event entity - one calendar entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier
    pub id: Uuid,
    /// Event name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// When the event starts
    pub event_date: DateTime<Utc>,
    /// When the event ends, if known
    pub event_end_date: Option<DateTime<Utc>>,
    /// Human-readable location line
    pub location: String,
    /// Venue name
    pub venue: Option<String>,
    /// City the event takes place in
    pub city: String,
    /// Country the event takes place in
    pub country: String,
    /// Venue latitude
    pub latitude: Option<f64>,
    /// Venue longitude
    pub longitude: Option<f64>,
    /// Where to sign up
    pub registration_url: Option<String>,
    /// Ticket or entry price, free text
    pub price: Option<String>,
    /// Organizing party
    pub organizer: Option<String>,
    /// Category label (e.g. Drift Event, Championship)
    pub event_type: Option<String>,
    /// Track configuration or layout name
    pub track_name: Option<String>,
    /// Identifier on the source site, used for deduplication
    pub external_id: Option<String>,
    /// Whether the event shows up on the public listing
    pub is_active: bool,
    /// Source this event was imported from
    pub source_id: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Event joined with its source for list views
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventWithSource {
    #[serde(flatten)]
    pub event: Event,
    /// Provenance record the event came from, if any
    pub source: Option<Source>,
}

/// DTO for creating a new event
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEvent {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "flexible_datetime::deserialize")]
    #[schema(value_type = String, example = "2025-06-01T10:00")]
    pub event_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "flexible_datetime_opt::deserialize")]
    #[schema(value_type = Option<String>)]
    pub event_end_date: Option<DateTime<Utc>>,
    pub location: String,
    #[serde(default)]
    pub venue: Option<String>,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub source_id: Option<Uuid>,
}

fn default_true() -> bool {
    true
}

/// DTO for updating an existing event.
///
/// Non-nullable columns use a single `Option`: absent or null leaves the
/// stored value untouched. Nullable columns use a double `Option` so an
/// explicit null clears the column while an absent field leaves it alone.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEvent {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "flexible_datetime_opt::deserialize")]
    #[schema(value_type = Option<String>)]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_datetime_double_opt::deserialize")]
    #[schema(value_type = Option<String>)]
    pub event_end_date: Option<Option<DateTime<Utc>>>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub venue: Option<Option<String>>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub longitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub registration_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub price: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub organizer: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub event_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub track_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub external_id: Option<Option<String>>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub source_id: Option<Option<Uuid>>,
}

/// PUT body: the target id plus the fields to change
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    pub id: Option<Uuid>,
    #[serde(flatten)]
    pub changes: UpdateEvent,
}

/// Query filters for the public listing
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    /// Exact country match; blank means unfiltered
    #[serde(default, deserialize_with = "blank_filter")]
    pub country: Option<String>,
    /// Exact city match; blank means unfiltered
    #[serde(default, deserialize_with = "blank_filter")]
    pub city: Option<String>,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub order: SortOrder,
}

/// Query parameters for deleting an event
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DeleteEventParams {
    pub id: Option<Uuid>,
}

impl Event {
    /// Create a new event from CreateEvent DTO
    pub fn new(input: CreateEvent) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            event_date: input.event_date,
            event_end_date: input.event_end_date,
            location: input.location,
            venue: input.venue,
            city: input.city,
            country: input.country,
            latitude: input.latitude,
            longitude: input.longitude,
            registration_url: input.registration_url,
            price: input.price,
            organizer: input.organizer,
            event_type: input.event_type,
            track_name: input.track_name,
            external_id: input.external_id,
            is_active: input.is_active,
            source_id: input.source_id,
            created_at: Utc::now(),
        }
    }

    /// Apply updates from UpdateEvent DTO
    pub fn apply_update(&mut self, update: UpdateEvent) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(event_date) = update.event_date {
            self.event_date = event_date;
        }
        if let Some(event_end_date) = update.event_end_date {
            self.event_end_date = event_end_date;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(venue) = update.venue {
            self.venue = venue;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
        if let Some(latitude) = update.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            self.longitude = longitude;
        }
        if let Some(registration_url) = update.registration_url {
            self.registration_url = registration_url;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(organizer) = update.organizer {
            self.organizer = organizer;
        }
        if let Some(event_type) = update.event_type {
            self.event_type = event_type;
        }
        if let Some(track_name) = update.track_name {
            self.track_name = track_name;
        }
        if let Some(external_id) = update.external_id {
            self.external_id = external_id;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(source_id) = update.source_id {
            self.source_id = source_id;
        }
    }
}
