//! Validated JSON extractor
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized body. Malformed
//! JSON is a 400, a body that parses but fails validation is a 422 listing
//! every offending field. Other rejections (e.g. a missing
//! `Content-Type`, 415) keep the status axum assigns.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ApiError;

pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Invalid(ValidationErrors),
}

/// `field: message` pairs, sorted by field so responses are stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {msg}")
            })
        })
        .collect();
    fields.sort();

    if fields.is_empty() {
        "Validation failed".to_string()
    } else {
        fields.join("; ")
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(rejection) => {
                // Body problems are a 400; transport problems such as a
                // missing content type keep axum's status.
                let status = match &rejection {
                    JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    _ => rejection.status(),
                };
                ApiError::new(status, format!("Invalid JSON: {}", rejection.body_text()))
                    .into_response()
            }
            Self::Invalid(errors) => {
                ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, describe(&errors)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;

        value.validate().map_err(ValidatedJsonRejection::Invalid)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct NewRole {
        #[validate(length(min = 1, max = 10))]
        name: String,
        #[validate(range(min = 1, max = 100))]
        rank: u32,
    }

    async fn handler(ValidatedJson(_body): ValidatedJson<NewRole>) -> &'static str {
        "ok"
    }

    async fn send(body: impl Into<Body>) -> StatusCode {
        let app = Router::new().route("/roles", post(handler));
        let req = Request::builder()
            .method("POST")
            .uri("/roles")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();
        app.oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn valid_body_passes() {
        let body = serde_json::json!({"name": "Nurse", "rank": 3});
        assert_eq!(send(body.to_string()).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        assert_eq!(send("not json").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_validation_is_422() {
        let body = serde_json::json!({"name": "", "rank": 0});
        assert_eq!(send(body.to_string()).await, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn missing_content_type_keeps_415() {
        let app = Router::new().route("/roles", post(handler));
        let req = Request::builder()
            .method("POST")
            .uri("/roles")
            .body(Body::from(r#"{"name": "Nurse", "rank": 3}"#))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
