use chrono::{DateTime, Utc};

use super::Slot;
use crate::shared::Filter;

/// Slot list criteria
#[derive(Debug, Clone, Default)]
pub struct SlotQuery {
    pub doctor_id: Option<i32>,
    pub is_booked: Option<bool>,
    /// Slots starting at or after this instant
    pub from: Option<DateTime<Utc>>,
    /// Slots ending at or before this instant
    pub to: Option<DateTime<Utc>>,
}

impl SlotQuery {
    pub fn filter(&self) -> Filter<Slot> {
        Filter::all()
            .and_some(self.doctor_id, |s: &Slot, id| s.doctor_id == *id)
            .and_some(self.is_booked, |s: &Slot, booked| s.is_booked == *booked)
            .and_some(self.from, |s: &Slot, from| s.starts_at >= *from)
            .and_some(self.to, |s: &Slot, to| s.ends_at <= *to)
    }
}
