//! Consumer REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{ConsumerDto, CreateConsumerRequest, CreateConsumerResponse};
use crate::application::ConsumerService;
use crate::domain::NewConsumer;
use crate::interfaces::http::common::{ApiResult, ErrorBody};
use crate::interfaces::http::middleware::GuardedJson;

#[derive(Clone)]
pub struct ConsumerState {
    pub service: Arc<ConsumerService>,
}

#[utoipa::path(
    get,
    path = "/api/consumers",
    tag = "Consumers",
    responses(
        (status = 200, description = "Consumers, newest first", body = Vec<ConsumerDto>),
        (status = 500, description = "Datastore failure", body = ErrorBody)
    )
)]
pub async fn list_consumers(State(state): State<ConsumerState>) -> ApiResult<Json<Vec<ConsumerDto>>> {
    let consumers = state.service.list().await?;
    Ok(Json(consumers.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/consumers/{id}",
    tag = "Consumers",
    params(("id" = i32, Path, description = "Consumer ID")),
    responses(
        (status = 200, description = "Consumer", body = ConsumerDto),
        (status = 404, description = "Consumer not found", body = ErrorBody)
    )
)]
pub async fn get_consumer(
    State(state): State<ConsumerState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ConsumerDto>> {
    Ok(Json(state.service.get(id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/consumers",
    tag = "Consumers",
    request_body = CreateConsumerRequest,
    responses(
        (status = 201, description = "Consumer added", body = CreateConsumerResponse),
        (status = 400, description = "Missing field, bad connection type or duplicate meter", body = ErrorBody)
    )
)]
pub async fn create_consumer(
    State(state): State<ConsumerState>,
    GuardedJson(body): GuardedJson<CreateConsumerRequest>,
) -> ApiResult<(StatusCode, Json<CreateConsumerResponse>)> {
    let consumer = state.service.register(NewConsumer::try_from(body)?).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateConsumerResponse {
            message: "Consumer added successfully".to_string(),
            consumer_id: consumer.id,
        }),
    ))
}
