//! Payment aggregate

pub mod model;
pub mod repository;

pub use model::{NewPayment, Payment, PaymentDetails};
pub use repository::PaymentRepository;
