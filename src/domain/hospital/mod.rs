//! Hospital aggregate

pub mod model;
pub mod query;

pub use model::Hospital;
pub use query::HospitalQuery;
