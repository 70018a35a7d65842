//! Infrastructure layer - storage adapters

pub mod storage;

pub use storage::{in_memory_repositories, seed_demo_data, InMemoryRepository};
