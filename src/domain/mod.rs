//! Domain layer: billing entities, pricing rules and repository ports

pub mod bill;
pub mod consumer;
pub mod dashboard;
pub mod payment;
pub mod repositories;
pub mod tariff;

pub use bill::{Bill, BillDetails, BillStatus, MeterReadings, NewBill};
pub use consumer::{Consumer, ConsumerStatus, NewConsumer};
pub use dashboard::{BillingSnapshot, DashboardStats};
pub use payment::{NewPayment, Payment, PaymentDetails};
pub use repositories::{DomainResult, RepositoryProvider};
pub use tariff::{compute_amount, cost_breakdown, ConnectionType, CostBreakdown};

pub use crate::shared::errors::DomainError;
