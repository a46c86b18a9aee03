//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::bill::BillRepository;
use super::consumer::ConsumerRepository;
use super::dashboard::DashboardRepository;
use super::payment::PaymentRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Services request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let consumer = repos.consumers().find_by_meter_number("MTR-0001").await?;
///     let bills = repos.bills().find_all(None).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn consumers(&self) -> &dyn ConsumerRepository;
    fn bills(&self) -> &dyn BillRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn dashboard(&self) -> &dyn DashboardRepository;
}
