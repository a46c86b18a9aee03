//! Payment repository interface

use async_trait::async_trait;

use super::model::{NewPayment, Payment, PaymentDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Payments joined with their bill's consumer, most recent first.
    async fn find_all(&self) -> DomainResult<Vec<PaymentDetails>>;

    /// Store the payment and mark its bill `Paid` as one atomic unit.
    ///
    /// Either both writes become visible or neither does. Returns
    /// `NotFound` without writing anything if the bill does not exist.
    async fn record(&self, payment: NewPayment) -> DomainResult<Payment>;
}
