//! DrugType domain entity

use chrono::{DateTime, Utc};

use crate::domain::entity::impl_entity;
use crate::shared::{SortKey, Sortable};

#[derive(Debug, Clone, PartialEq)]
pub struct DrugType {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DrugType {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl_entity!(DrugType, "DrugType");

impl Sortable for DrugType {
    const SORT_FIELDS: &'static [&'static str] = &["id", "name", "createdAt"];

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(SortKey::text(&self.name)),
            "createdAt" => Some(self.created_at.into()),
            _ => None,
        }
    }
}
