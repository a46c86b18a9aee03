//! Bill repository interface

use async_trait::async_trait;

use super::model::{Bill, BillDetails, BillStatus, NewBill};
use crate::domain::DomainResult;

#[async_trait]
pub trait BillRepository: Send + Sync {
    /// Bills joined with their consumer, most recent first, optionally by status.
    async fn find_all(&self, status: Option<BillStatus>) -> DomainResult<Vec<BillDetails>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<BillDetails>>;
    /// Persist a `Pending` bill.
    async fn save(&self, bill: NewBill) -> DomainResult<Bill>;
}
