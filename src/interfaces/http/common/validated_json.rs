//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally checks
//! that every required field was supplied and then runs
//! `validator::Validate::validate()` on the deserialized value.
//! Any failure becomes a 400 response with an `{"error": ...}` body.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error_response;

/// Request bodies whose required fields are modelled as `Option`.
///
/// Absent and `null` fields are both reported as missing.
pub trait RequiredFields {
    /// The first required field that is absent, in declaration order.
    fn first_missing(&self) -> Option<&'static str>;
}

/// An extractor that deserializes JSON, checks presence, then validates it.
///
/// # Usage
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateThing {
///     #[validate(length(min = 1, message = "name must not be empty"))]
///     name: Option<String>,
/// }
///
/// impl RequiredFields for CreateThing {
///     fn first_missing(&self) -> Option<&'static str> {
///         self.name.is_none().then_some("name")
///     }
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<CreateThing>) {
///     // `body.name` is present and non-empty
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// JSON parsing failed.
    JsonError(JsonRejection),
    /// A required field was absent.
    MissingField(&'static str),
    /// Validation failed.
    ValidationError(validator::ValidationErrors),
}

impl ValidatedJsonRejection {
    fn message(&self) -> String {
        match self {
            Self::JsonError(rejection) => format!("Invalid JSON: {}", rejection.body_text()),
            Self::MissingField(field) => format!("Missing required field: {}", field),
            Self::ValidationError(errors) => {
                let mut field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{}: {}", field, e.code))
                        })
                    })
                    .collect();
                field_errors.sort();

                if field_errors.is_empty() {
                    "Validation failed".to_string()
                } else {
                    field_errors.join("; ")
                }
            }
        }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let message = self.message();
        tracing::debug!(error = %message, "Rejected request body");
        error_response(StatusCode::BAD_REQUEST, message)
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + RequiredFields,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        if let Some(field) = value.first_missing() {
            return Err(ValidatedJsonRejection::MissingField(field));
        }

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, max = 10, message = "name must be 1-10 characters"))]
        name: Option<String>,
        #[validate(range(min = 0, message = "reading must not be negative"))]
        reading: Option<i64>,
    }

    impl RequiredFields for TestBody {
        fn first_missing(&self) -> Option<&'static str> {
            if self.name.is_none() {
                Some("name")
            } else if self.reading.is_none() {
                Some("reading")
            } else {
                None
            }
        }
    }

    async fn handler(ValidatedJson(_body): ValidatedJson<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(body: Body) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn json(value: serde_json::Value) -> Body {
        Body::from(serde_json::to_vec(&value).unwrap())
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let (status, _) = send(json(serde_json::json!({"name": "Alice", "reading": 30}))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_returns_400() {
        let (status, body) = send(Body::from("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn missing_fields_reported_in_order() {
        let (status, body) = send(json(serde_json::json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required field: name");

        let (_, body) = send(json(serde_json::json!({"name": "", "reading": null}))).await;
        assert_eq!(body["error"], "Missing required field: reading");
    }

    #[tokio::test]
    async fn validation_failure_returns_400() {
        let (status, body) = send(json(serde_json::json!({"name": "", "reading": -1}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "name must be 1-10 characters; reading must not be negative"
        );
    }
}
