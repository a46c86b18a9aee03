//! Bill REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{BillDto, BillListQuery, GenerateBillRequest, GenerateBillResponse};
use crate::application::{BillingService, GenerateBill};
use crate::interfaces::http::common::{ApiResult, ErrorBody};
use crate::interfaces::http::middleware::GuardedJson;

#[derive(Clone)]
pub struct BillState {
    pub service: Arc<BillingService>,
}

#[utoipa::path(
    get,
    path = "/api/bills",
    tag = "Bills",
    params(BillListQuery),
    responses(
        (status = 200, description = "Bills, newest first", body = Vec<BillDto>),
        (status = 400, description = "Unknown status filter", body = ErrorBody)
    )
)]
pub async fn list_bills(
    State(state): State<BillState>,
    Query(query): Query<BillListQuery>,
) -> ApiResult<Json<Vec<BillDto>>> {
    let bills = state.service.list(query.status()?).await?;
    Ok(Json(bills.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/bills/{id}",
    tag = "Bills",
    params(("id" = i32, Path, description = "Bill ID")),
    responses(
        (status = 200, description = "Bill", body = BillDto),
        (status = 404, description = "Bill not found", body = ErrorBody)
    )
)]
pub async fn get_bill(
    State(state): State<BillState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<BillDto>> {
    Ok(Json(state.service.get(id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/bills",
    tag = "Bills",
    request_body = GenerateBillRequest,
    responses(
        (status = 201, description = "Bill generated", body = GenerateBillResponse),
        (status = 400, description = "Missing field or reading regression", body = ErrorBody),
        (status = 404, description = "Consumer not found", body = ErrorBody)
    )
)]
pub async fn generate_bill(
    State(state): State<BillState>,
    GuardedJson(body): GuardedJson<GenerateBillRequest>,
) -> ApiResult<(StatusCode, Json<GenerateBillResponse>)> {
    let bill = state.service.generate(GenerateBill::try_from(body)?).await?;
    Ok((
        StatusCode::CREATED,
        Json(GenerateBillResponse {
            message: "Bill generated successfully".to_string(),
            bill_id: bill.id,
            units_consumed: bill.units_consumed,
            amount: bill.amount,
        }),
    ))
}
