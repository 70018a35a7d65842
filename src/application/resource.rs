//! Per-aggregate hooks used by the generic [`CrudService`](super::CrudService)

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity, Repositories, SharedRepository};
use crate::shared::{Filter, Sortable};

/// An aggregate served through the generic CRUD service.
///
/// Implementors name their repository, turn list criteria into a
/// [`Filter`], and enforce whatever cross-aggregate rules apply on write.
#[async_trait]
pub trait Resource: Entity + Sortable {
    /// List criteria accepted by [`Resource::filter`].
    type Criteria: Send + Sync;

    fn repository(repos: &Repositories) -> &SharedRepository<Self>;

    fn filter(criteria: &Self::Criteria) -> Filter<Self>;

    /// Runs before insert and update. `self.id()` is `0` on insert.
    async fn check(&self, _repos: &Repositories) -> DomainResult<()> {
        Ok(())
    }

    /// Runs before delete; rejects removal of rows still referenced elsewhere.
    async fn before_delete(_id: i32, _repos: &Repositories) -> DomainResult<()> {
        Ok(())
    }
}
