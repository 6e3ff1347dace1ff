use std::sync::Arc;

use crate::error::{SourceError, SourceResult};
use crate::models::{CreateSource, Source};
use crate::repository::SourceRepository;

/// Service layer for Source operations
#[derive(Clone)]
pub struct SourceService<R: SourceRepository> {
    repository: Arc<R>,
}

impl<R: SourceRepository> SourceService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new source
    pub async fn create_source(&self, input: CreateSource) -> SourceResult<Source> {
        self.repository
            .create(input)
            .await
            .map_err(SourceError::Create)
    }

    /// List all sources, ordered by name
    pub async fn list_sources(&self) -> SourceResult<Vec<Source>> {
        self.repository.list().await.map_err(SourceError::Fetch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockSourceRepository;
    use sea_orm::DbErr;
    use serde_json::json;

    fn manual_entry() -> CreateSource {
        serde_json::from_value(json!({
            "name": "Manual Entry",
            "url": "https://manual",
            "scraper_type": "manual",
            "country_filter": ["Netherlands", "Germany", "Belgium", "France"]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_source_passes_through() {
        let mut mock_repo = MockSourceRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Ok(Source::new(input)));

        let service = SourceService::new(mock_repo);
        let source = service.create_source(manual_entry()).await.unwrap();

        assert_eq!(source.name, "Manual Entry");
        assert_eq!(source.country_filter.len(), 4);
    }

    #[tokio::test]
    async fn test_create_failure_maps_to_create_error() {
        let mut mock_repo = MockSourceRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(DbErr::Custom("not-null violation".to_string())));

        let service = SourceService::new(mock_repo);
        let err = service.create_source(manual_entry()).await.unwrap_err();

        assert!(matches!(err, SourceError::Create(_)));
        assert_eq!(err.to_string(), "Failed to create source");
    }

    #[tokio::test]
    async fn test_list_failure_maps_to_fetch_error() {
        let mut mock_repo = MockSourceRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(DbErr::Custom("connection closed".to_string())));

        let service = SourceService::new(mock_repo);
        let err = service.list_sources().await.unwrap_err();

        assert!(matches!(err, SourceError::Fetch(_)));
    }
}
