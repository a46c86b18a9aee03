//! Datastore guard
//!
//! Read routes ping the database before the handler runs so an
//! unreachable datastore fails fast with a uniform error. Write routes
//! extract their body with [`GuardedJson`], which reports a malformed or
//! incomplete body before the ping.

use axum::{
    body::Body,
    extract::{FromRef, FromRequest, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use tracing::error;
use validator::Validate;

use super::common::{error_response, RequiredFields, ValidatedJson};
use crate::infrastructure::database::ping;

pub const DATABASE_UNAVAILABLE: &str = "Database connection failed";

/// `500 {"error": "Database connection failed"}` when the ping fails.
async fn ensure_database(db: &DatabaseConnection) -> Result<(), Response> {
    ping(db).await.map_err(|e| {
        error!(error = %e, "Database ping failed");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, DATABASE_UNAVAILABLE)
    })
}

/// Short-circuits read routes when the datastore is unreachable.
pub async fn require_database(
    State(db): State<DatabaseConnection>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match ensure_database(&db).await {
        Ok(()) => next.run(request).await,
        Err(resp) => resp,
    }
}

/// [`ValidatedJson`] followed by the datastore guard.
pub struct GuardedJson<T>(pub T);

impl<S, T> FromRequest<S> for GuardedJson<T>
where
    T: DeserializeOwned + Validate + RequiredFields + Send,
    DatabaseConnection: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let ValidatedJson(value) = ValidatedJson::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        ensure_database(&DatabaseConnection::from_ref(state)).await?;

        Ok(GuardedJson(value))
    }
}
