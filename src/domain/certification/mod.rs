//! Certification aggregate
//!
//! Board certifications and licences held by doctors.

pub mod model;
pub mod query;

pub use model::Certification;
pub use query::CertificationQuery;
