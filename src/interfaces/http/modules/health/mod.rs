//! Health module: banner and datastore reachability

pub mod handlers;

pub use handlers::*;
