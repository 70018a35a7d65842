//! Patient aggregate

pub mod model;
pub mod query;

pub use model::{Gender, Patient};
pub use query::PatientQuery;
