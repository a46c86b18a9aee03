//! # Electricity Billing System
//!
//! REST service for an electricity utility: consumer registration,
//! bill generation from meter readings using tiered tariffs, payment
//! recording and dashboard statistics.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Billing entities, tariff pricing and repository traits
//! - **application**: Services orchestrating the use cases
//! - **infrastructure**: SeaORM entities, repositories and schema bootstrap
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: Process lifecycle shared by both binaries

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, resolve_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{bootstrap_schema, init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
