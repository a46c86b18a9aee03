//! Consumer aggregate

pub mod model;
pub mod repository;

pub use model::{Consumer, ConsumerStatus, NewConsumer};
pub use repository::ConsumerRepository;
