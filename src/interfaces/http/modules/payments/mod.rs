//! Payments module: settlement of bills

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
