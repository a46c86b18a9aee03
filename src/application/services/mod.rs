//! Application services

mod billing;
mod consumer;
mod dashboard;
mod payment;

pub use billing::{BillingService, GenerateBill};
pub use consumer::ConsumerService;
pub use dashboard::DashboardService;
pub use payment::PaymentService;
