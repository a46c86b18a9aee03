//! Tariffs module: pricing preview, nothing stored

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
