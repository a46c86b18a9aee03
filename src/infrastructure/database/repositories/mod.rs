//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod bill_repository;
pub mod consumer_repository;
pub mod dashboard_repository;
pub mod payment_repository;
pub mod repository_provider;

pub use bill_repository::SeaOrmBillRepository;
pub use consumer_repository::SeaOrmConsumerRepository;
pub use dashboard_repository::SeaOrmDashboardRepository;
pub use payment_repository::SeaOrmPaymentRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
