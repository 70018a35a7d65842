//! Generic REST handlers shared by every aggregate
//!
//! Each resource module implements [`ResourceApi`] for its entity and gets
//! `GET/POST {PATH}` and `GET/PUT/DELETE {PATH}/{id}` from
//! [`resource_routes`].

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use super::{ApiError, ApiResponse, EmptyData, ListQuery, PagingQuery, ValidatedJson};
use crate::application::{CrudService, Resource};
use crate::domain::DomainResult;
use crate::shared::{Paged, PagingRequest};

/// HTTP surface of a [`Resource`].
pub trait ResourceApi: Resource {
    /// Collection path relative to the API prefix, e.g. `/roles`.
    const PATH: &'static str;

    type Dto: Serialize + From<Self> + Send + 'static;
    type CreateRequest: DeserializeOwned + Validate + Send + 'static;
    type UpdateRequest: DeserializeOwned + Validate + Send + 'static;
    /// Entity-specific list filters taken from the query string.
    type ListParams: DeserializeOwned + Send + 'static;

    fn criteria(params: Self::ListParams) -> DomainResult<Self::Criteria>;

    fn from_create(request: Self::CreateRequest) -> DomainResult<Self>;

    /// Apply the fields present in `request` to `current`.
    fn apply_update(current: Self, request: Self::UpdateRequest) -> DomainResult<Self>;
}

type ServiceState<E> = State<Arc<CrudService<E>>>;

async fn list<E: ResourceApi>(
    State(service): ServiceState<E>,
    ListQuery(params): ListQuery<E::ListParams>,
    Query(paging): Query<PagingQuery>,
) -> Result<Json<Paged<E::Dto>>, ApiError> {
    let criteria = E::criteria(params)?;
    let window = service
        .list(&criteria, &PagingRequest::from(paging))
        .await?;
    Ok(Json(window.paginate(E::Dto::from)))
}

async fn get_one<E: ResourceApi>(
    State(service): ServiceState<E>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<E::Dto>>, ApiError> {
    let entity = service.get(id).await?;
    Ok(Json(ApiResponse::success(E::Dto::from(entity))))
}

async fn create<E: ResourceApi>(
    State(service): ServiceState<E>,
    ValidatedJson(request): ValidatedJson<E::CreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<E::Dto>>), ApiError> {
    let entity = E::from_create(request)?;
    let created = service.create(entity).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(E::Dto::from(created))),
    ))
}

async fn update<E: ResourceApi>(
    State(service): ServiceState<E>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<E::UpdateRequest>,
) -> Result<Json<ApiResponse<E::Dto>>, ApiError> {
    let current = service.get(id).await?;
    let changed = E::apply_update(current, request)?;
    let updated = service.update(id, changed).await?;
    Ok(Json(ApiResponse::success(E::Dto::from(updated))))
}

async fn delete<E: ResourceApi>(
    State(service): ServiceState<E>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

/// Collection and item routes for `E`, with the service as state.
pub fn resource_routes<E: ResourceApi>(service: Arc<CrudService<E>>) -> Router {
    Router::new()
        .route(E::PATH, get(list::<E>).post(create::<E>))
        .route(
            &format!("{}/{{id}}", E::PATH),
            get(get_one::<E>).put(update::<E>).delete(delete::<E>),
        )
        .with_state(service)
}
