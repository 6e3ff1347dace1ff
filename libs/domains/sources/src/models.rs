use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Source entity - provenance record for events
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Source {
    /// Unique identifier
    pub id: Uuid,
    /// Display name (e.g. "Manual Entry")
    pub name: String,
    /// Where the data comes from
    pub url: Option<String>,
    /// Free-form tag describing the ingestion method (e.g. "manual")
    pub scraper_type: Option<String>,
    /// Opaque scraper settings blob
    pub scraper_config: serde_json::Value,
    /// Country names this source covers
    pub country_filter: Vec<String>,
    /// Whether the source is in use
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new source
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSource {
    pub name: String,
    pub url: Option<String>,
    pub scraper_type: Option<String>,
    #[serde(default = "default_scraper_config")]
    pub scraper_config: serde_json::Value,
    #[serde(default)]
    pub country_filter: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_scraper_config() -> serde_json::Value {
    serde_json::json!({})
}

fn default_true() -> bool {
    true
}

impl Source {
    /// Create a new source from a CreateSource DTO
    pub fn new(input: CreateSource) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            url: input.url,
            scraper_type: input.scraper_type,
            scraper_config: input.scraper_config,
            country_filter: input.country_filter,
            is_active: input.is_active,
            created_at: Utc::now(),
        }
    }
}
