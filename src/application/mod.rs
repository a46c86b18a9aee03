//! Application layer: use cases over the domain repositories

pub mod services;

pub use services::{BillingService, ConsumerService, DashboardService, GenerateBill, PaymentService};
