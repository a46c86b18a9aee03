//! Read-only dashboard aggregates

pub mod model;
pub mod repository;

pub use model::{collection_rate, BillingSnapshot, DashboardStats};
pub use repository::DashboardRepository;
