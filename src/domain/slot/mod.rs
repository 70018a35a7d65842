//! Slot aggregate
//!
//! Bookable consultation windows of a doctor.

pub mod model;
pub mod query;

pub use model::Slot;
pub use query::SlotQuery;
