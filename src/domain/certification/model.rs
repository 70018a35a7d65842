//! Certification domain entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entity::impl_entity;
use crate::shared::{SortKey, Sortable};

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub id: i32,
    pub doctor_id: i32,
    pub title: String,
    pub issuer: String,
    pub issued_at: NaiveDate,
    /// `None` for certifications that never expire
    pub expires_at: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Certification {
    pub fn new(
        doctor_id: i32,
        title: impl Into<String>,
        issuer: impl Into<String>,
        issued_at: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            doctor_id,
            title: title.into(),
            issuer: issuer.into(),
            issued_at,
            expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_valid_period(&self) -> bool {
        self.expires_at.map_or(true, |expires| expires > self.issued_at)
    }

    /// Issued on or before `date` and not yet expired on it.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.issued_at <= date && self.expires_at.map_or(true, |expires| date < expires)
    }
}

impl_entity!(Certification, "Certification");

impl Sortable for Certification {
    const SORT_FIELDS: &'static [&'static str] = &["id", "title", "issuedAt", "expiresAt"];

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(self.id.into()),
            "title" => Some(SortKey::text(&self.title)),
            "issuedAt" => Some(self.issued_at.into()),
            "expiresAt" => Some(self.expires_at.into()),
            _ => None,
        }
    }
}
