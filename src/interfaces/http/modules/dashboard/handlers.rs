//! Dashboard REST API handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::DashboardStatsDto;
use crate::application::DashboardService;
use crate::interfaces::http::common::{ApiResult, ErrorBody};

#[derive(Clone)]
pub struct DashboardState {
    pub service: Arc<DashboardService>,
}

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Aggregate billing figures", body = DashboardStatsDto),
        (status = 500, description = "Datastore failure", body = ErrorBody)
    )
)]
pub async fn dashboard_stats(
    State(state): State<DashboardState>,
) -> ApiResult<Json<DashboardStatsDto>> {
    Ok(Json(state.service.stats().await?.into()))
}
