use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    models::{CreateSource, Source},
    repository::SourceRepository,
};

/// SeaORM-backed implementation of [`SourceRepository`]
pub struct PgSourceRepository {
    db: DatabaseConnection,
}

impl PgSourceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SourceRepository for PgSourceRepository {
    async fn create(&self, input: CreateSource) -> Result<Source, DbErr> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(source_id = %model.id, "Created source");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Source>, DbErr> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Source>, DbErr> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
