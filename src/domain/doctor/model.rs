//! Doctor domain entity

use chrono::{DateTime, Utc};

use crate::domain::entity::impl_entity;
use crate::shared::{SortKey, Sortable};

#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique, compared case-insensitively
    pub email: String,
    pub phone: Option<String>,
    pub specialty: String,
    pub hospital_id: Option<i32>,
    pub role_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Doctor {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            specialty: specialty.into(),
            hospital_id: None,
            role_id: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl_entity!(Doctor, "Doctor");

impl Sortable for Doctor {
    const SORT_FIELDS: &'static [&'static str] = &[
        "id",
        "lastName",
        "firstName",
        "specialty",
        "createdAt",
    ];

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(self.id.into()),
            "lastName" => Some(SortKey::text(&self.last_name)),
            "firstName" => Some(SortKey::text(&self.first_name)),
            "specialty" => Some(SortKey::text(&self.specialty)),
            "createdAt" => Some(self.created_at.into()),
            _ => None,
        }
    }
}
