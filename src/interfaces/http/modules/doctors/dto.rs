//! Doctor DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Doctor;
use crate::interfaces::http::common::nullable;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: String,
    pub hospital_id: Option<i32>,
    pub role_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Doctor> for DoctorDto {
    fn from(d: Doctor) -> Self {
        Self {
            full_name: d.full_name(),
            id: d.id,
            first_name: d.first_name,
            last_name: d.last_name,
            email: d.email,
            phone: d.phone,
            specialty: d.specialty,
            hospital_id: d.hospital_id,
            role_id: d.role_id,
            is_active: d.is_active,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 3, max = 32))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub specialty: String,
    pub hospital_id: Option<i32>,
    pub role_id: Option<i32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 32))]
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    #[validate(length(min = 1, max = 100))]
    pub specialty: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub hospital_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub role_id: Option<Option<i32>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDoctorsParams {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub hospital_id: Option<i32>,
    pub role_id: Option<i32>,
    pub is_active: Option<bool>,
}
