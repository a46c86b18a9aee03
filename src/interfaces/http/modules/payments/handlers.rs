//! Payment REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{PaymentDto, RecordPaymentRequest, RecordPaymentResponse};
use crate::application::PaymentService;
use crate::domain::NewPayment;
use crate::interfaces::http::common::{ApiResult, ErrorBody};
use crate::interfaces::http::middleware::GuardedJson;

#[derive(Clone)]
pub struct PaymentState {
    pub service: Arc<PaymentService>,
}

#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "Payments",
    responses(
        (status = 200, description = "Payments, newest first", body = Vec<PaymentDto>),
        (status = 500, description = "Datastore failure", body = ErrorBody)
    )
)]
pub async fn list_payments(State(state): State<PaymentState>) -> ApiResult<Json<Vec<PaymentDto>>> {
    let payments = state.service.list().await?;
    Ok(Json(payments.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "Payments",
    request_body = RecordPaymentRequest,
    responses(
        (status = 201, description = "Payment recorded, bill marked Paid", body = RecordPaymentResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorBody),
        (status = 404, description = "Bill not found", body = ErrorBody)
    )
)]
pub async fn record_payment(
    State(state): State<PaymentState>,
    GuardedJson(body): GuardedJson<RecordPaymentRequest>,
) -> ApiResult<(StatusCode, Json<RecordPaymentResponse>)> {
    let payment = state.service.record(NewPayment::try_from(body)?).await?;
    Ok((
        StatusCode::CREATED,
        Json(RecordPaymentResponse {
            message: "Payment recorded successfully".to_string(),
            payment_id: payment.id,
        }),
    ))
}
