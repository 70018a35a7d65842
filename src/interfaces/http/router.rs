//! API router

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::common::{resource_routes, ResourceApi};
use super::modules::health::{health_check, HealthState};
use super::modules::request_id::request_id_middleware;
use crate::application::CrudService;
use crate::domain::{
    Certification, Doctor, DrugType, Hospital, Patient, Repositories, Role, Slot,
};

pub const API_PREFIX: &str = "/api/v1";

fn routes_for<E: ResourceApi>(repos: &Repositories, default_limit: u64) -> Router {
    let service = CrudService::<E>::new(repos.clone()).with_default_limit(default_limit);
    resource_routes(Arc::new(service))
}

/// Build the full HTTP application over `repos`.
///
/// `default_limit` is the page size used when a list request carries no
/// usable `limit`.
pub fn create_api_router(repos: Repositories, default_limit: u64) -> Router {
    let api = Router::new()
        .merge(routes_for::<Role>(&repos, default_limit))
        .merge(routes_for::<Hospital>(&repos, default_limit))
        .merge(routes_for::<Doctor>(&repos, default_limit))
        .merge(routes_for::<DrugType>(&repos, default_limit))
        .merge(routes_for::<Slot>(&repos, default_limit))
        .merge(routes_for::<Certification>(&repos, default_limit))
        .merge(routes_for::<Patient>(&repos, default_limit));

    let health = Router::new()
        .route("/health", get(health_check))
        .with_state(HealthState::new());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest(API_PREFIX, api)
        .merge(health)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
