//! Application layer - use-case orchestration over the domain repositories

pub mod resource;
pub mod resources;
pub mod service;

pub use resource::Resource;
pub use service::CrudService;
