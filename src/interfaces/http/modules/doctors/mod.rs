//! Doctors module

pub mod dto;

pub use dto::*;

use crate::domain::{Doctor, DoctorQuery, DomainResult};
use crate::interfaces::http::common::ResourceApi;

impl ResourceApi for Doctor {
    const PATH: &'static str = "/doctors";

    type Dto = DoctorDto;
    type CreateRequest = CreateDoctorRequest;
    type UpdateRequest = UpdateDoctorRequest;
    type ListParams = ListDoctorsParams;

    fn criteria(params: ListDoctorsParams) -> DomainResult<DoctorQuery> {
        Ok(DoctorQuery {
            search: params.search,
            specialty: params.specialty,
            hospital_id: params.hospital_id,
            role_id: params.role_id,
            is_active: params.is_active,
        })
    }

    fn from_create(req: CreateDoctorRequest) -> DomainResult<Self> {
        let mut doctor = Doctor::new(
            req.first_name.trim(),
            req.last_name.trim(),
            req.email.trim(),
            req.specialty.trim(),
        );
        doctor.phone = req.phone;
        doctor.hospital_id = req.hospital_id;
        doctor.role_id = req.role_id;
        doctor.is_active = req.is_active;
        Ok(doctor)
    }

    fn apply_update(mut current: Self, req: UpdateDoctorRequest) -> DomainResult<Self> {
        if let Some(first_name) = req.first_name {
            current.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = req.last_name {
            current.last_name = last_name.trim().to_string();
        }
        if let Some(email) = req.email {
            current.email = email.trim().to_string();
        }
        if let Some(phone) = req.phone {
            current.phone = phone;
        }
        if let Some(specialty) = req.specialty {
            current.specialty = specialty.trim().to_string();
        }
        if let Some(hospital_id) = req.hospital_id {
            current.hospital_id = hospital_id;
        }
        if let Some(role_id) = req.role_id {
            current.role_id = role_id;
        }
        if let Some(is_active) = req.is_active {
            current.is_active = is_active;
        }
        Ok(current)
    }
}
