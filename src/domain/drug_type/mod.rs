//! DrugType aggregate
//!
//! Drug classification catalogue (antibiotic, analgesic, ...).

pub mod model;
pub mod query;

pub use model::DrugType;
pub use query::DrugTypeQuery;
