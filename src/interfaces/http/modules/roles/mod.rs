//! Roles module - staff role catalogue

pub mod dto;

pub use dto::*;

use crate::domain::{DomainResult, Role, RoleQuery};
use crate::interfaces::http::common::ResourceApi;

impl ResourceApi for Role {
    const PATH: &'static str = "/roles";

    type Dto = RoleDto;
    type CreateRequest = CreateRoleRequest;
    type UpdateRequest = UpdateRoleRequest;
    type ListParams = ListRolesParams;

    fn criteria(params: ListRolesParams) -> DomainResult<RoleQuery> {
        Ok(RoleQuery {
            search: params.search,
        })
    }

    fn from_create(req: CreateRoleRequest) -> DomainResult<Self> {
        Ok(Role::new(req.name.trim(), req.description))
    }

    fn apply_update(mut current: Self, req: UpdateRoleRequest) -> DomainResult<Self> {
        if let Some(name) = req.name {
            current.name = name.trim().to_string();
        }
        if let Some(description) = req.description {
            current.description = description;
        }
        Ok(current)
    }
}
