use std::sync::Arc;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, EventFilter, EventWithSource, UpdateEvent};
use crate::repository::EventRepository;

/// Service layer for Event operations
#[derive(Clone)]
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new event
    pub async fn create_event(&self, input: CreateEvent) -> EventResult<Event> {
        self.repository
            .create(input)
            .await
            .map_err(EventError::Create)
    }

    /// Get a single event by ID, without the source join
    pub async fn get_event(&self, id: Uuid) -> EventResult<Event> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(EventError::FetchOne)?
            .ok_or(EventError::NotFound)
    }

    /// List active events for the public calendar
    pub async fn list_public_events(&self, filter: EventFilter) -> EventResult<Vec<EventWithSource>> {
        tracing::debug!(sort_by = %filter.sort_by, order = %filter.order, "Listing public events");
        self.repository
            .list_public(filter)
            .await
            .map_err(EventError::Fetch)
    }

    /// List every event for the admin panel, newest first
    pub async fn list_admin_events(&self) -> EventResult<Vec<EventWithSource>> {
        self.repository.list_admin().await.map_err(EventError::Fetch)
    }

    /// Apply changes to an existing event
    pub async fn update_event(&self, id: Uuid, changes: UpdateEvent) -> EventResult<Event> {
        self.repository
            .update(id, changes)
            .await
            .map_err(EventError::Update)?
            .ok_or(EventError::NotFound)
    }

    /// Flip the active flag, leaving every other field untouched
    pub async fn toggle_event(&self, id: Uuid) -> EventResult<Event> {
        let event = self.get_event(id).await?;
        let changes = UpdateEvent {
            is_active: Some(!event.is_active),
            ..Default::default()
        };
        self.update_event(id, changes).await
    }

    /// Delete an event. Deleting an id that no longer exists is still a
    /// success, so retries and double-clicks stay quiet.
    pub async fn delete_event(&self, id: Uuid) -> EventResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(EventError::Delete)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockEventRepository;
    use sea_orm::DbErr;
    use serde_json::json;

    fn zandvoort() -> CreateEvent {
        serde_json::from_value(json!({
            "name": "Drift Masters Zandvoort",
            "event_date": "2025-06-01T10:00",
            "location": "Circuit Zandvoort",
            "city": "Zandvoort",
            "country": "Netherlands"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_event_maps_to_not_found() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = EventService::new(mock_repo);
        let err = service.get_event(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, EventError::NotFound));
        assert_eq!(err.to_string(), "Event not found");
    }

    #[tokio::test]
    async fn test_list_failure_maps_to_fetch_error() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_list_public()
            .returning(|_| Err(DbErr::Custom("connection closed".to_string())));

        let service = EventService::new(mock_repo);
        let err = service
            .list_public_events(EventFilter::default())
            .await
            .unwrap_err();

        assert!(matches!(err, EventError::Fetch(_)));
        assert_eq!(err.to_string(), "Failed to fetch events");
    }

    #[tokio::test]
    async fn test_update_failure_maps_to_update_error() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Err(DbErr::Custom("value too long".to_string())));

        let service = EventService::new(mock_repo);
        let err = service
            .update_event(Uuid::now_v7(), UpdateEvent::default())
            .await
            .unwrap_err();

        assert!(matches!(err, EventError::Update(_)));
        assert_eq!(err.to_string(), "Failed to update event");
    }

    #[tokio::test]
    async fn test_toggle_flips_only_the_active_flag() {
        let event = Event::new(zandvoort());
        let id = event.id;
        assert!(event.is_active);

        let mut mock_repo = MockEventRepository::new();
        let fetched = event.clone();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(Some(fetched.clone())));
        mock_repo
            .expect_update()
            .withf(|_, changes| {
                changes.is_active == Some(false)
                    && changes.name.is_none()
                    && changes.event_date.is_none()
                    && changes.description.is_none()
                    && changes.source_id.is_none()
            })
            .returning(move |_, changes| {
                let mut updated = event.clone();
                updated.apply_update(changes);
                Ok(Some(updated))
            });

        let service = EventService::new(mock_repo);
        let toggled = service.toggle_event(id).await.unwrap();

        assert!(!toggled.is_active);
        assert_eq!(toggled.name, "Drift Masters Zandvoort");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = EventService::new(mock_repo);
        assert!(service.delete_event(Uuid::now_v7()).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_failure_maps_to_delete_error() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(DbErr::Custom("deadlock detected".to_string())));

        let service = EventService::new(mock_repo);
        let err = service.delete_event(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, EventError::Delete(_)));
        assert_eq!(err.to_string(), "Failed to delete event");
    }
}
