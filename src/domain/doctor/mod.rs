//! Doctor aggregate
//!
//! Practitioners, optionally attached to a hospital and a staff role.

pub mod model;
pub mod query;

pub use model::Doctor;
pub use query::DoctorQuery;
