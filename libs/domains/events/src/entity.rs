use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the events table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub event_date: DateTimeWithTimeZone,
    pub event_end_date: Option<DateTimeWithTimeZone>,
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
    pub source_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "domain_sources::entity::Entity",
        from = "Column::SourceId",
        to = "domain_sources::entity::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Source,
}

impl Related<domain_sources::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Source.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Event
impl From<Model> for crate::models::Event {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            event_date: model.event_date.into(),
            event_end_date: model.event_end_date.map(Into::into),
            location: model.location,
            venue: model.venue,
            city: model.city,
            country: model.country,
            latitude: model.latitude,
            longitude: model.longitude,
            registration_url: model.registration_url,
            price: model.price,
            organizer: model.organizer,
            event_type: model.event_type,
            track_name: model.track_name,
            external_id: model.external_id,
            is_active: model.is_active,
            source_id: model.source_id,
            created_at: model.created_at.into(),
        }
    }
}

// Conversion from domain CreateEvent to Sea-ORM ActiveModel
impl From<crate::models::CreateEvent> for ActiveModel {
    fn from(input: crate::models::CreateEvent) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            description: Set(input.description),
            event_date: Set(input.event_date.into()),
            event_end_date: Set(input.event_end_date.map(Into::into)),
            location: Set(input.location),
            venue: Set(input.venue),
            city: Set(input.city),
            country: Set(input.country),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            registration_url: Set(input.registration_url),
            price: Set(input.price),
            organizer: Set(input.organizer),
            event_type: Set(input.event_type),
            track_name: Set(input.track_name),
            external_id: Set(input.external_id),
            is_active: Set(input.is_active),
            source_id: Set(input.source_id),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}

// Conversion from the full domain Event, used when persisting updates
impl From<crate::models::Event> for ActiveModel {
    fn from(event: crate::models::Event) -> Self {
        ActiveModel {
            id: Set(event.id),
            name: Set(event.name),
            description: Set(event.description),
            event_date: Set(event.event_date.into()),
            event_end_date: Set(event.event_end_date.map(Into::into)),
            location: Set(event.location),
            venue: Set(event.venue),
            city: Set(event.city),
            country: Set(event.country),
            latitude: Set(event.latitude),
            longitude: Set(event.longitude),
            registration_url: Set(event.registration_url),
            price: Set(event.price),
            organizer: Set(event.organizer),
            event_type: Set(event.event_type),
            track_name: Set(event.track_name),
            external_id: Set(event.external_id),
            is_active: Set(event.is_active),
            source_id: Set(event.source_id),
            created_at: Set(event.created_at.into()),
        }
    }
}
