use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity,
    models::{CreateEvent, Event, EventFilter, EventWithSource, SortKey, SortOrder, UpdateEvent},
    repository::EventRepository,
};

/// PostgreSQL implementation of EventRepository
pub struct PgEventRepository {
    db: DatabaseConnection,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn sort_column(key: SortKey) -> entity::Column {
    match key {
        SortKey::EventDate => entity::Column::EventDate,
        SortKey::Name => entity::Column::Name,
        SortKey::City => entity::Column::City,
        SortKey::Country => entity::Column::Country,
        SortKey::CreatedAt => entity::Column::CreatedAt,
    }
}

fn with_source(rows: Vec<(entity::Model, Option<domain_sources::entity::Model>)>) -> Vec<EventWithSource> {
    rows.into_iter()
        .map(|(event, source)| EventWithSource {
            event: event.into(),
            source: source.map(Into::into),
        })
        .collect()
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, input: CreateEvent) -> Result<Event, DbErr> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(event_id = %model.id, "Created event");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Event>, DbErr> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_public(&self, filter: EventFilter) -> Result<Vec<EventWithSource>, DbErr> {
        let mut query = entity::Entity::find()
            .find_also_related(domain_sources::entity::Entity)
            .filter(entity::Column::IsActive.eq(true));

        if let Some(country) = filter.country {
            query = query.filter(entity::Column::Country.eq(country));
        }

        if let Some(city) = filter.city {
            query = query.filter(entity::Column::City.eq(city));
        }

        let column = sort_column(filter.sort_by);
        query = match filter.order {
            SortOrder::Asc => query.order_by_asc(column),
            SortOrder::Desc => query.order_by_desc(column),
        };

        let rows = query.all(&self.db).await?;
        Ok(with_source(rows))
    }

    async fn list_admin(&self) -> Result<Vec<EventWithSource>, DbErr> {
        let rows = entity::Entity::find()
            .find_also_related(domain_sources::entity::Entity)
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(with_source(rows))
    }

    async fn update(&self, id: Uuid, changes: UpdateEvent) -> Result<Option<Event>, DbErr> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut event: Event = model.into();
        event.apply_update(changes);

        let active_model: entity::ActiveModel = event.into();
        let updated = active_model.update(&self.db).await?;

        tracing::info!(event_id = %id, "Updated event");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(event_id = %id, "Deleted event");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
