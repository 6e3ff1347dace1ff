use async_trait::async_trait;
use sea_orm::DbErr;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{CreateEvent, Event, EventFilter, EventWithSource, SortKey, SortOrder, UpdateEvent};
use domain_sources::{InMemorySourceRepository, SourceRepository};

/// Repository trait for Event persistence.
///
/// Implementations report plain [`DbErr`]; the service layer attaches the
/// per-operation caller-facing messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Create a new event
    async fn create(&self, input: CreateEvent) -> Result<Event, DbErr>;

    /// Get an event by ID, without the source join
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Event>, DbErr>;

    /// List active events matching the filter, joined with their sources
    async fn list_public(&self, filter: EventFilter) -> Result<Vec<EventWithSource>, DbErr>;

    /// List every event regardless of active flag, newest first
    async fn list_admin(&self) -> Result<Vec<EventWithSource>, DbErr>;

    /// Apply changes to an event, returning None when the id is unknown
    async fn update(&self, id: Uuid, changes: UpdateEvent) -> Result<Option<Event>, DbErr>;

    /// Delete an event, returning whether a row existed
    async fn delete(&self, id: Uuid) -> Result<bool, DbErr>;
}

fn compare(a: &Event, b: &Event, key: SortKey) -> Ordering {
    match key {
        SortKey::EventDate => a.event_date.cmp(&b.event_date),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::City => a.city.cmp(&b.city),
        SortKey::Country => a.country.cmp(&b.country),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// In-memory implementation of EventRepository (for development/testing).
///
/// Holds its own event map and joins against an [`InMemorySourceRepository`],
/// which can be shared with a source repository serving the same process so
/// both sides see one store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
    sources: InMemorySourceRepository,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
            sources: InMemorySourceRepository::new(),
        }
    }

    /// Build a repository that resolves source joins from `sources`
    pub fn with_sources(sources: InMemorySourceRepository) -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
            sources,
        }
    }

    async fn join(&self, events: Vec<Event>) -> Result<Vec<EventWithSource>, DbErr> {
        let mut joined = Vec::with_capacity(events.len());
        for event in events {
            let source = match event.source_id {
                Some(source_id) => self.sources.get_by_id(source_id).await?,
                None => None,
            };
            joined.push(EventWithSource { event, source });
        }
        Ok(joined)
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, input: CreateEvent) -> Result<Event, DbErr> {
        let mut events = self.events.write().await;

        let event = Event::new(input);
        events.insert(event.id, event.clone());

        tracing::info!(event_id = %event.id, name = %event.name, "Created event");
        Ok(event)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Event>, DbErr> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn list_public(&self, filter: EventFilter) -> Result<Vec<EventWithSource>, DbErr> {
        let mut result: Vec<Event> = {
            let events = self.events.read().await;
            events
                .values()
                .filter(|e| {
                    if !e.is_active {
                        return false;
                    }
                    if let Some(ref country) = filter.country {
                        if &e.country != country {
                            return false;
                        }
                    }
                    if let Some(ref city) = filter.city {
                        if &e.city != city {
                            return false;
                        }
                    }
                    true
                })
                .cloned()
                .collect()
        };

        result.sort_by(|a, b| {
            let ordering = compare(a, b, filter.sort_by);
            match filter.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        self.join(result).await
    }

    async fn list_admin(&self) -> Result<Vec<EventWithSource>, DbErr> {
        let mut result: Vec<Event> = {
            let events = self.events.read().await;
            events.values().cloned().collect()
        };

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        self.join(result).await
    }

    async fn update(&self, id: Uuid, changes: UpdateEvent) -> Result<Option<Event>, DbErr> {
        let mut events = self.events.write().await;

        let Some(event) = events.get_mut(&id) else {
            return Ok(None);
        };
        event.apply_update(changes);

        tracing::info!(event_id = %id, "Updated event");
        Ok(Some(event.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let mut events = self.events.write().await;

        let existed = events.remove(&id).is_some();
        if existed {
            tracing::info!(event_id = %id, "Deleted event");
        }
        Ok(existed)
    }
}
