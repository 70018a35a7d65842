//! Query-string extractor for list filters
//!
//! `ListQuery<T>` works like `axum::extract::Query<T>`, but a query string
//! that does not fit `T` (e.g. `hospitalId=abc`) is reported through
//! [`ApiError`] as a validation failure, inside the usual envelope.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::domain::DomainError;

pub struct ListQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ListQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::from(DomainError::Validation(rejection.body_text()))
            })?;
        Ok(ListQuery(value))
    }
}
