pub mod bills;
pub mod consumers;
pub mod dashboard;
pub mod health;
pub mod metrics;
pub mod payments;
pub mod request_id;
pub mod tariffs;
