//! Hospitals module

pub mod dto;

pub use dto::*;

use crate::domain::{DomainResult, Hospital, HospitalQuery};
use crate::interfaces::http::common::ResourceApi;

impl ResourceApi for Hospital {
    const PATH: &'static str = "/hospitals";

    type Dto = HospitalDto;
    type CreateRequest = CreateHospitalRequest;
    type UpdateRequest = UpdateHospitalRequest;
    type ListParams = ListHospitalsParams;

    fn criteria(params: ListHospitalsParams) -> DomainResult<HospitalQuery> {
        Ok(HospitalQuery {
            search: params.search,
            city: params.city,
            is_active: params.is_active,
        })
    }

    fn from_create(req: CreateHospitalRequest) -> DomainResult<Self> {
        let mut hospital = Hospital::new(req.name.trim(), req.address.trim(), req.city.trim());
        hospital.phone = req.phone;
        hospital.is_active = req.is_active;
        Ok(hospital)
    }

    fn apply_update(mut current: Self, req: UpdateHospitalRequest) -> DomainResult<Self> {
        if let Some(name) = req.name {
            current.name = name.trim().to_string();
        }
        if let Some(address) = req.address {
            current.address = address.trim().to_string();
        }
        if let Some(city) = req.city {
            current.city = city.trim().to_string();
        }
        if let Some(phone) = req.phone {
            current.phone = phone;
        }
        if let Some(is_active) = req.is_active {
            current.is_active = is_active;
        }
        Ok(current)
    }
}
