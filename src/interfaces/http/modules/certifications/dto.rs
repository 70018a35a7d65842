//! Certification DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Certification;
use crate::interfaces::http::common::nullable;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationDto {
    pub id: i32,
    pub doctor_id: i32,
    pub title: String,
    pub issuer: String,
    pub issued_at: NaiveDate,
    pub expires_at: Option<NaiveDate>,
    /// Valid on the day the response was produced
    pub is_valid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Certification> for CertificationDto {
    fn from(c: Certification) -> Self {
        Self {
            is_valid: c.is_valid_on(Utc::now().date_naive()),
            id: c.id,
            doctor_id: c.doctor_id,
            title: c.title,
            issuer: c.issuer,
            issued_at: c.issued_at,
            expires_at: c.expires_at,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificationRequest {
    #[validate(range(min = 1))]
    pub doctor_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub issuer: String,
    pub issued_at: NaiveDate,
    pub expires_at: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificationRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub issuer: Option<String>,
    pub issued_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub expires_at: Option<Option<NaiveDate>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCertificationsParams {
    pub doctor_id: Option<i32>,
    pub search: Option<String>,
    /// `YYYY-MM-DD`; only certifications valid on that day
    pub valid_on: Option<NaiveDate>,
}
