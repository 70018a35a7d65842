//! HTTP REST API
//!
//! - `common`: envelope, error mapping, extractors, generic CRUD handlers
//! - `modules`: per-resource DTOs and routing metadata
//! - `router`: the assembled application

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, API_PREFIX};
