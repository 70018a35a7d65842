//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::{DomainError, DomainResult, Entity, Repository};

/// In-memory repository for development and testing
pub struct InMemoryRepository<E: Entity> {
    rows: DashMap<i32, E>,
    counter: AtomicI32,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            counter: AtomicI32::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<E>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        // DashMap iteration order is arbitrary; id order keeps pagination
        // tie-breaks deterministic.
        let mut rows: Vec<E> = self.rows.iter().map(|row| row.value().clone()).collect();
        rows.sort_unstable_by_key(|row| row.id());
        Ok(rows)
    }

    async fn insert(&self, mut entity: E) -> DomainResult<E> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        entity.set_id(id);
        entity.set_timestamps(now, now);
        self.rows.insert(id, entity.clone());
        debug!(entity = E::NAME, id, "Inserted");
        Ok(entity)
    }

    async fn update(&self, mut entity: E) -> DomainResult<E> {
        let id = entity.id();
        let Some(mut stored) = self.rows.get_mut(&id) else {
            return Err(DomainError::not_found(E::NAME, id));
        };
        entity.set_timestamps(stored.created_at(), Utc::now());
        *stored = entity.clone();
        debug!(entity = E::NAME, id, "Updated");
        Ok(entity)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.rows
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(E::NAME, id))?;
        debug!(entity = E::NAME, id, "Deleted");
        Ok(())
    }
}
