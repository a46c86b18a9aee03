//! Dashboard module: read-only rollups

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
