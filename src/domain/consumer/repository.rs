//! Consumer repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Consumer, NewConsumer};
use crate::domain::DomainResult;

#[async_trait]
pub trait ConsumerRepository: Send + Sync {
    /// All consumers, most recently registered first.
    async fn find_all(&self) -> DomainResult<Vec<Consumer>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Consumer>>;
    async fn find_by_meter_number(&self, meter_number: &str) -> DomainResult<Option<Consumer>>;
    /// Insert an `Active` consumer. A meter number already in use yields `Conflict`.
    async fn save(&self, consumer: NewConsumer, registration_date: NaiveDate)
        -> DomainResult<Consumer>;
}
