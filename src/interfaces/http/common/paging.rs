//! Paging query parameters
//!
//! Parsing is lenient: a value that is missing or does not parse falls back
//! to its default instead of rejecting the request.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::shared::PagingRequest;

/// `?offset=&limit=&sortBy=&sortDirection=`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagingQuery {
    #[serde(deserialize_with = "lenient")]
    pub offset: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub limit: Option<i64>,
    #[serde(deserialize_with = "non_blank")]
    pub sort_by: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub sort_direction: Option<i32>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

impl From<PagingQuery> for PagingRequest {
    fn from(query: PagingQuery) -> Self {
        let defaults = PagingRequest::default();
        Self {
            offset: query.offset.unwrap_or(defaults.offset),
            limit: query.limit,
            sort_by: query.sort_by,
            sort_direction: query.sort_direction.unwrap_or(defaults.sort_direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use super::*;

    fn parse(uri: &'static str) -> PagingRequest {
        let uri: Uri = uri.parse().unwrap();
        let Query(query) = Query::<PagingQuery>::try_from_uri(&uri).unwrap();
        query.into()
    }

    #[test]
    fn missing_params_use_defaults() {
        assert_eq!(parse("/roles"), PagingRequest::default());
    }

    #[test]
    fn camel_case_params_are_read() {
        let request = parse("/roles?offset=3&limit=5&sortBy=name&sortDirection=-1");
        assert_eq!(request.offset, 3);
        assert_eq!(request.limit, Some(5));
        assert_eq!(request.sort_by.as_deref(), Some("name"));
        assert_eq!(request.sort_direction, -1);
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let request = parse("/roles?offset=abc&limit=&sortBy=%20&sortDirection=up");
        assert_eq!(request, PagingRequest::default());
    }

    #[test]
    fn out_of_range_values_are_passed_through_for_clamping() {
        let request = parse("/roles?offset=-4&limit=0");
        assert_eq!(request.offset, -4);
        assert_eq!(request.limit, Some(0));
    }

    #[test]
    fn unrelated_params_are_ignored() {
        let request = parse("/doctors?specialty=cardiology&limit=7");
        assert_eq!(request.limit, Some(7));
    }
}
