//! Repository traits for the domain layer
//!
//! Contains:
//! - `Repository<E>` - storage port implemented once per backend, used for every aggregate
//! - `Repositories` - unified access to the per-aggregate repositories

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

use super::{Certification, Doctor, DrugType, Entity, Hospital, Patient, Role, Slot};
use crate::shared::DomainResult;

/// Storage port for one aggregate type.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<E>>;

    /// All stored entities in ascending id order.
    async fn find_all(&self) -> DomainResult<Vec<E>>;

    /// Assigns id and timestamps; returns the stored entity.
    async fn insert(&self, entity: E) -> DomainResult<E>;

    /// Replaces the stored entity with the same id, keeping its creation
    /// time. Fails with `NotFound` if there is none.
    async fn update(&self, entity: E) -> DomainResult<E>;

    async fn delete(&self, id: i32) -> DomainResult<()>;

    async fn exists(&self, id: i32) -> DomainResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

pub type SharedRepository<E> = Arc<dyn Repository<E>>;

// ── Repositories ────────────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &Repositories) {
///     let doctor = repos.doctors.find_by_id(3).await?;
///     let slots = repos.slots.find_all().await?;
/// }
/// ```
#[derive(Clone)]
pub struct Repositories {
    pub roles: SharedRepository<Role>,
    pub hospitals: SharedRepository<Hospital>,
    pub doctors: SharedRepository<Doctor>,
    pub drug_types: SharedRepository<DrugType>,
    pub slots: SharedRepository<Slot>,
    pub certifications: SharedRepository<Certification>,
    pub patients: SharedRepository<Patient>,
    /// Serializes commands across every aggregate. Integrity rules read
    /// other repositories, so a check and its write must not interleave
    /// with another command.
    pub writes: Arc<Mutex<()>>,
}

impl Repositories {
    /// Held from the integrity check until the write completes.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }
}
