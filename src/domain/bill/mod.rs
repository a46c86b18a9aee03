//! Bill aggregate
//!
//! Bills are priced from meter readings when generated and only change
//! afterwards when a payment settles them.

pub mod model;
pub mod repository;

pub use model::{Bill, BillDetails, BillStatus, MeterReadings, NewBill};
pub use repository::BillRepository;
