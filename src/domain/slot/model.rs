//! Slot domain entity

use chrono::{DateTime, Duration, Utc};

use crate::domain::entity::impl_entity;
use crate::shared::{SortKey, Sortable};

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub id: i32,
    pub doctor_id: i32,
    pub starts_at: DateTime<Utc>,
    /// Exclusive
    pub ends_at: DateTime<Utc>,
    pub is_booked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Slot {
    pub fn new(doctor_id: i32, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            doctor_id,
            starts_at,
            ends_at,
            is_booked: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn duration(&self) -> Duration {
        self.ends_at - self.starts_at
    }

    pub fn has_valid_window(&self) -> bool {
        self.starts_at < self.ends_at
    }

    /// Half-open intervals: a slot ending at 10:00 does not overlap one
    /// starting at 10:00.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.starts_at < other.ends_at && other.starts_at < self.ends_at
    }
}

impl_entity!(Slot, "Slot");

impl Sortable for Slot {
    const SORT_FIELDS: &'static [&'static str] = &["id", "startsAt", "endsAt", "doctorId"];

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(self.id.into()),
            "startsAt" => Some(self.starts_at.into()),
            "endsAt" => Some(self.ends_at.into()),
            "doctorId" => Some(self.doctor_id.into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, hour, 0, 0).unwrap()
    }

    #[test]
    fn window_validity() {
        assert!(Slot::new(1, at(9), at(10)).has_valid_window());
        assert!(!Slot::new(1, at(10), at(10)).has_valid_window());
        assert!(!Slot::new(1, at(11), at(10)).has_valid_window());
    }

    #[test]
    fn adjacent_slots_do_not_overlap() {
        let first = Slot::new(1, at(9), at(10));
        let second = Slot::new(1, at(10), at(11));
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn nested_and_partial_slots_overlap() {
        let long = Slot::new(1, at(9), at(12));
        assert!(long.overlaps(&Slot::new(1, at(10), at(11))));
        assert!(long.overlaps(&Slot::new(1, at(11), at(13))));
        assert_eq!(long.duration(), Duration::hours(3));
    }
}
