//! # Telemedicine service
//!
//! REST backend for clinical and administrative records: doctors, roles,
//! hospitals, drug types, consultation slots, certifications and patients.
//!
//! ## Architecture
//!
//! - **shared**: paginator, filter composition, domain errors, shutdown
//! - **domain**: entities, list criteria and the repository port
//! - **application**: generic CRUD service and per-entity integrity rules
//! - **infrastructure**: in-memory storage and demo seed data
//! - **interfaces**: axum HTTP API
//! - **config** / **server**: TOML configuration and the server runtime

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use interfaces::http::create_api_router;
pub use server::{init_tracing, ServerHandle, ServerOptions};
pub use shared::{Filter, PageWindow, Paged, Paginator, PagingRequest};
