//! Drug types module - dosage form catalogue

pub mod dto;

pub use dto::*;

use crate::domain::{DomainResult, DrugType, DrugTypeQuery};
use crate::interfaces::http::common::ResourceApi;

impl ResourceApi for DrugType {
    const PATH: &'static str = "/drug-types";

    type Dto = DrugTypeDto;
    type CreateRequest = CreateDrugTypeRequest;
    type UpdateRequest = UpdateDrugTypeRequest;
    type ListParams = ListDrugTypesParams;

    fn criteria(params: ListDrugTypesParams) -> DomainResult<DrugTypeQuery> {
        Ok(DrugTypeQuery {
            search: params.search,
        })
    }

    fn from_create(req: CreateDrugTypeRequest) -> DomainResult<Self> {
        Ok(DrugType::new(req.name.trim(), req.description))
    }

    fn apply_update(mut current: Self, req: UpdateDrugTypeRequest) -> DomainResult<Self> {
        if let Some(name) = req.name {
            current.name = name.trim().to_string();
        }
        if let Some(description) = req.description {
            current.description = description;
        }
        Ok(current)
    }
}
