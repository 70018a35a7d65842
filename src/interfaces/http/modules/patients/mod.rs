//! Patients module

pub mod dto;

pub use dto::*;

use crate::domain::{DomainError, DomainResult, Gender, Patient, PatientQuery};
use crate::interfaces::http::common::ResourceApi;

fn parse_gender(raw: &str) -> DomainResult<Gender> {
    raw.parse().map_err(DomainError::Validation)
}

impl ResourceApi for Patient {
    const PATH: &'static str = "/patients";

    type Dto = PatientDto;
    type CreateRequest = CreatePatientRequest;
    type UpdateRequest = UpdatePatientRequest;
    type ListParams = ListPatientsParams;

    fn criteria(params: ListPatientsParams) -> DomainResult<PatientQuery> {
        let gender = params
            .gender
            .as_deref()
            .filter(|g| !g.trim().is_empty())
            .map(parse_gender)
            .transpose()?;
        Ok(PatientQuery {
            search: params.search,
            gender,
        })
    }

    fn from_create(req: CreatePatientRequest) -> DomainResult<Self> {
        let gender = req
            .gender
            .as_deref()
            .map(parse_gender)
            .transpose()?
            .unwrap_or_default();
        let mut patient = Patient::new(
            req.first_name.trim(),
            req.last_name.trim(),
            req.date_of_birth,
            gender,
        );
        patient.email = req.email;
        patient.phone = req.phone;
        Ok(patient)
    }

    fn apply_update(mut current: Self, req: UpdatePatientRequest) -> DomainResult<Self> {
        if let Some(first_name) = req.first_name {
            current.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = req.last_name {
            current.last_name = last_name.trim().to_string();
        }
        if let Some(email) = req.email {
            current.email = email;
        }
        if let Some(phone) = req.phone {
            current.phone = phone;
        }
        if let Some(date_of_birth) = req.date_of_birth {
            current.date_of_birth = date_of_birth;
        }
        if let Some(gender) = req.gender.as_deref() {
            current.gender = parse_gender(gender)?;
        }
        Ok(current)
    }
}
