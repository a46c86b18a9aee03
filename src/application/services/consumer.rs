//! Consumer registry service

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::domain::{Consumer, DomainError, DomainResult, NewConsumer, RepositoryProvider};

/// Registers and looks up consumers
pub struct ConsumerService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ConsumerService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// All consumers, most recently registered first
    pub async fn list(&self) -> DomainResult<Vec<Consumer>> {
        self.repos.consumers().find_all().await
    }

    pub async fn get(&self, consumer_id: i32) -> DomainResult<Consumer> {
        self.repos
            .consumers()
            .find_by_id(consumer_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Consumer", "consumer_id", consumer_id))
    }

    /// Register a consumer dated today in local time.
    pub async fn register(&self, consumer: NewConsumer) -> DomainResult<Consumer> {
        self.register_on(consumer, Local::now().date_naive()).await
    }

    /// Register with an explicit registration date.
    pub async fn register_on(
        &self,
        consumer: NewConsumer,
        registration_date: NaiveDate,
    ) -> DomainResult<Consumer> {
        let saved = self
            .repos
            .consumers()
            .save(consumer, registration_date)
            .await?;

        metrics::counter!(
            "consumers_registered_total",
            "connection_type" => saved.connection_type.to_string()
        )
        .increment(1);
        info!(
            consumer_id = saved.id,
            meter_number = %saved.meter_number,
            connection_type = %saved.connection_type,
            "Consumer registered"
        );

        Ok(saved)
    }
}
