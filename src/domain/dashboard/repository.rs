//! Dashboard repository interface

use async_trait::async_trait;

use super::model::BillingSnapshot;
use crate::domain::DomainResult;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn snapshot(&self) -> DomainResult<BillingSnapshot>;
}
