use crate::models::{CreateSource, Source};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the sources table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub scraper_type: Option<String>,
    pub scraper_config: Json, // JSONB field
    pub country_filter: Json, // JSONB list of country names
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Source
impl From<Model> for Source {
    fn from(model: Model) -> Self {
        // Parse the country list from JSON
        let country_filter: Vec<String> =
            serde_json::from_value(model.country_filter).unwrap_or_default();

        Self {
            id: model.id,
            name: model.name,
            url: model.url,
            scraper_type: model.scraper_type,
            scraper_config: model.scraper_config,
            country_filter,
            is_active: model.is_active,
            created_at: model.created_at.into(),
        }
    }
}

// Conversion from domain CreateSource to Sea-ORM ActiveModel
impl From<CreateSource> for ActiveModel {
    fn from(input: CreateSource) -> Self {
        let country_filter = serde_json::to_value(&input.country_filter)
            .expect("Failed to serialize country filter");

        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            url: Set(input.url),
            scraper_type: Set(input.scraper_type),
            scraper_config: Set(input.scraper_config),
            country_filter: Set(country_filter),
            is_active: Set(input.is_active),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}
