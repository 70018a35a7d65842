//! Common entity contract
//!
//! Every stored aggregate has an integer id assigned by its repository and
//! the usual creation/update timestamps.

use chrono::{DateTime, Utc};

pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in errors and logs.
    const NAME: &'static str;

    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
    fn created_at(&self) -> DateTime<Utc>;
    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);
}

/// Implement [`Entity`] for a struct with `id`, `created_at` and
/// `updated_at` fields.
macro_rules! impl_entity {
    ($ty:ty, $name:literal) => {
        impl $crate::domain::Entity for $ty {
            const NAME: &'static str = $name;

            fn id(&self) -> i32 {
                self.id
            }

            fn set_id(&mut self, id: i32) {
                self.id = id;
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn set_timestamps(
                &mut self,
                created_at: ::chrono::DateTime<::chrono::Utc>,
                updated_at: ::chrono::DateTime<::chrono::Utc>,
            ) {
                self.created_at = created_at;
                self.updated_at = updated_at;
            }
        }
    };
}

pub(crate) use impl_entity;
