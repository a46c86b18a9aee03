//! Infrastructure layer - external concerns

pub mod database;

pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{bootstrap_schema, init_database, DatabaseConfig};
