//! Hospital domain entity

use chrono::{DateTime, Utc};

use crate::domain::entity::impl_entity;
use crate::shared::{SortKey, Sortable};

#[derive(Debug, Clone, PartialEq)]
pub struct Hospital {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    /// Inactive hospitals stay listed but accept no new doctors
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hospital {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            address: address.into(),
            city: city.into(),
            phone: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl_entity!(Hospital, "Hospital");

impl Sortable for Hospital {
    const SORT_FIELDS: &'static [&'static str] = &["id", "name", "city", "createdAt"];

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(SortKey::text(&self.name)),
            "city" => Some(SortKey::text(&self.city)),
            "createdAt" => Some(self.created_at.into()),
            _ => None,
        }
    }
}
