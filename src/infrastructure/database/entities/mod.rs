//! Database entities module

pub mod bill;
pub mod consumer;
pub mod payment;

pub use bill::Entity as Bill;
pub use consumer::Entity as Consumer;
pub use payment::Entity as Payment;
