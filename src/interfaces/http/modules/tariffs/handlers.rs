//! Tariff preview handler

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{TariffPreviewRequest, TariffPreviewResponse};
use crate::application::BillingService;
use crate::interfaces::http::common::{ApiResult, ErrorBody, ValidatedJson};

#[derive(Clone)]
pub struct TariffState {
    pub service: Arc<BillingService>,
}

#[utoipa::path(
    post,
    path = "/api/tariffs/preview",
    tag = "Tariffs",
    request_body = TariffPreviewRequest,
    responses(
        (status = 200, description = "Amount that would be billed", body = TariffPreviewResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorBody)
    )
)]
pub async fn preview_tariff(
    State(state): State<TariffState>,
    ValidatedJson(body): ValidatedJson<TariffPreviewRequest>,
) -> ApiResult<Json<TariffPreviewResponse>> {
    let (units, connection_type) = body.parts()?;
    Ok(Json(state.service.preview(units, connection_type).into()))
}
