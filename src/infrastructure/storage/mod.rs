//! Storage implementations

mod memory;
mod seed;

use std::sync::Arc;

pub use memory::InMemoryRepository;
pub use seed::seed_demo_data;

use crate::domain::Repositories;

/// Fresh, empty in-memory repositories for every aggregate.
pub fn in_memory_repositories() -> Repositories {
    Repositories {
        roles: Arc::new(InMemoryRepository::new()),
        hospitals: Arc::new(InMemoryRepository::new()),
        doctors: Arc::new(InMemoryRepository::new()),
        drug_types: Arc::new(InMemoryRepository::new()),
        slots: Arc::new(InMemoryRepository::new()),
        certifications: Arc::new(InMemoryRepository::new()),
        patients: Arc::new(InMemoryRepository::new()),
        writes: Arc::default(),
    }
}
