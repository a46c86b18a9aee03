//! Bills module: generation from meter readings and listing

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
