//! Hospital DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Hospital;
use crate::interfaces::http::common::nullable;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hospital> for HospitalDto {
    fn from(h: Hospital) -> Self {
        Self {
            id: h.id,
            name: h.name,
            address: h.address,
            city: h.city,
            phone: h.phone,
            is_active: h.is_active,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHospitalRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 300))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 3, max = 32))]
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHospitalRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 300))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(min = 3, max = 32))]
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListHospitalsParams {
    pub search: Option<String>,
    pub city: Option<String>,
    pub is_active: Option<bool>,
}
