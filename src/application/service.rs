//! Generic CRUD orchestration
//!
//! HTTP handlers stay thin and delegate every use case to a
//! [`CrudService`], one instance per aggregate.

use std::marker::PhantomData;

use tracing::{debug, info};

use super::resource::Resource;
use crate::domain::{DomainError, DomainResult, Repositories, SharedRepository};
use crate::shared::{PageWindow, Paginator, PagingRequest, DEFAULT_PAGE_SIZE};

pub struct CrudService<E: Resource> {
    repos: Repositories,
    default_limit: u64,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Resource> CrudService<E> {
    pub fn new(repos: Repositories) -> Self {
        Self {
            repos,
            default_limit: DEFAULT_PAGE_SIZE,
            _entity: PhantomData,
        }
    }

    /// Page size used when a request carries no usable limit.
    pub fn with_default_limit(mut self, default_limit: u64) -> Self {
        self.default_limit = default_limit.max(1);
        self
    }

    fn repo(&self) -> &SharedRepository<E> {
        E::repository(&self.repos)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Filter, sort and cut one page.
    ///
    /// An unknown `sort_by` fails with [`DomainError::Paging`]; out-of-range
    /// paging input is clamped, never rejected.
    pub async fn list(
        &self,
        criteria: &E::Criteria,
        paging: &PagingRequest,
    ) -> DomainResult<PageWindow<E>> {
        let rows = self.repo().find_all().await?;
        let filter = E::filter(criteria);
        let sort_by = paging.sort_by.as_deref().unwrap_or(E::DEFAULT_SORT_FIELD);

        let window = Paginator::from(rows.into_iter().filter(|row| filter.matches(row)))
            .with_default_limit(self.default_limit)
            .get_range_by(
                paging.offset,
                paging.limit.unwrap_or(0),
                sort_by,
                paging.sort_direction,
            )?;

        let meta = window.meta();
        debug!(
            entity = E::NAME,
            filters = filter.len(),
            sort_by,
            direction = ?paging.direction(),
            page = meta.current_page,
            page_size = meta.page_size,
            total = meta.total_items,
            "Listed page"
        );
        Ok(window)
    }

    pub async fn get(&self, id: i32) -> DomainResult<E> {
        self.repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(E::NAME, id))
    }

    // ── Commands ────────────────────────────────────────────────
    //
    // Each command holds the shared write lock from its integrity check
    // until the write lands.

    pub async fn create(&self, entity: E) -> DomainResult<E> {
        let _guard = self.repos.lock_writes().await;
        entity.check(&self.repos).await?;
        let created = self.repo().insert(entity).await?;
        info!(entity = E::NAME, id = created.id(), "Created");
        Ok(created)
    }

    /// Replace the entity stored under `id`. The id inside `entity` is
    /// ignored.
    pub async fn update(&self, id: i32, mut entity: E) -> DomainResult<E> {
        let _guard = self.repos.lock_writes().await;
        self.get(id).await?;
        entity.set_id(id);
        entity.check(&self.repos).await?;
        let updated = self.repo().update(entity).await?;
        info!(entity = E::NAME, id, "Updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        let _guard = self.repos.lock_writes().await;
        if !self.repo().exists(id).await? {
            return Err(DomainError::not_found(E::NAME, id));
        }
        E::before_delete(id, &self.repos).await?;
        self.repo().delete(id).await?;
        info!(entity = E::NAME, id, "Deleted");
        Ok(())
    }
}
