use async_trait::async_trait;
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{CreateSource, Source};

/// Repository trait for Source persistence.
///
/// Implementations report plain [`DbErr`]; the service layer attaches the
/// per-operation caller-facing messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceRepository: Send + Sync {
    /// Create a new source
    async fn create(&self, input: CreateSource) -> Result<Source, DbErr>;

    /// Get a source by ID
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Source>, DbErr>;

    /// List all sources, ordered by name ascending
    async fn list(&self) -> Result<Vec<Source>, DbErr>;
}

/// In-memory implementation of SourceRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemorySourceRepository {
    sources: Arc<RwLock<HashMap<Uuid, Source>>>,
}

impl InMemorySourceRepository {
    pub fn new() -> Self {
        Self {
            sources: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SourceRepository for InMemorySourceRepository {
    async fn create(&self, input: CreateSource) -> Result<Source, DbErr> {
        let mut sources = self.sources.write().await;

        let source = Source::new(input);
        sources.insert(source.id, source.clone());

        tracing::info!(source_id = %source.id, "Created source");
        Ok(source)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Source>, DbErr> {
        let sources = self.sources.read().await;
        Ok(sources.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Source>, DbErr> {
        let sources = self.sources.read().await;

        let mut result: Vec<Source> = sources.values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(result)
    }
}
