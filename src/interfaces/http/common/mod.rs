//! Shared HTTP building blocks: response envelope, error mapping, extractors

pub mod error;
pub mod list_query;
pub mod nullable;
pub mod paging;
pub mod resource;
pub mod validated_json;

use serde::{Deserialize, Serialize};

pub use error::ApiError;
pub use list_query::ListQuery;
pub use nullable::nullable;
pub use paging::PagingQuery;
pub use resource::{resource_routes, ResourceApi};
pub use validated_json::ValidatedJson;

/// Standard envelope for single-entity responses.
///
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// `null` on failure
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Payload for operations without return data
#[derive(Debug, Serialize, Deserialize)]
pub struct EmptyData {}
