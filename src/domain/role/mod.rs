//! Role aggregate
//!
//! Staff roles (physician, nurse, ...) referenced by doctors.

pub mod model;
pub mod query;

pub use model::Role;
pub use query::RoleQuery;
