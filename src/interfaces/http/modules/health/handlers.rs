//! Service banner and health check handlers

use axum::{extract::State, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::infrastructure::database::ping;

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub db: DatabaseConnection,
}

/// Service health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests
    pub status: String,
    /// `connected` or `disconnected`
    pub database: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BannerResponse {
    pub message: String,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "API is running", body = BannerResponse))
)]
pub async fn root_banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Electricity Billing System API is running!".to_string(),
        status: "success".to_string(),
    })
}

/// Reports datastore reachability. Never fails itself.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Service health", body = HealthResponse))
)]
pub async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    let database = match ping(&state.db).await {
        Ok(()) => "connected",
        Err(e) => {
            warn!(error = %e, "Health check could not reach the database");
            "disconnected"
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        database: database.to_string(),
    })
}
