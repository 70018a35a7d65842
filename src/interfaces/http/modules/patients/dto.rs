//! Patient DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Patient;
use crate::interfaces::http::common::nullable;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    pub age: i32,
    pub gender: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Patient> for PatientDto {
    fn from(p: Patient) -> Self {
        Self {
            age: p.age_on(Utc::now().date_naive()),
            gender: p.gender.as_str(),
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            phone: p.phone,
            date_of_birth: p.date_of_birth,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 32))]
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    /// `male`, `female`, `other` or `unknown` (default)
    pub gender: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    #[serde(default, deserialize_with = "nullable")]
    pub email: Option<Option<String>>,
    #[validate(length(min = 3, max = 32))]
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPatientsParams {
    pub search: Option<String>,
    pub gender: Option<String>,
}
