//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::bill::BillRepository;
use crate::domain::consumer::ConsumerRepository;
use crate::domain::dashboard::DashboardRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::repositories::RepositoryProvider;

use super::bill_repository::SeaOrmBillRepository;
use super::consumer_repository::SeaOrmConsumerRepository;
use super::dashboard_repository::SeaOrmDashboardRepository;
use super::payment_repository::SeaOrmPaymentRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let consumer = repos.consumers().find_by_id(1).await?;
/// let pending = repos.bills().find_all(Some(BillStatus::Pending)).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    consumers: SeaOrmConsumerRepository,
    bills: SeaOrmBillRepository,
    payments: SeaOrmPaymentRepository,
    dashboard: SeaOrmDashboardRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            consumers: SeaOrmConsumerRepository::new(db.clone()),
            bills: SeaOrmBillRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db.clone()),
            dashboard: SeaOrmDashboardRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn consumers(&self) -> &dyn ConsumerRepository {
        &self.consumers
    }

    fn bills(&self) -> &dyn BillRepository {
        &self.bills
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }

    fn dashboard(&self) -> &dyn DashboardRepository {
        &self.dashboard
    }
}
