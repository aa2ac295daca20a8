//! # Warehouse Management Service
//!
//! Single-node warehouse inventory tracker: login, item upserts,
//! low-stock alerts, a naive stock forecast and an admin user panel,
//! backed by two SQLite tables.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits
//! - **application**: Services and the session registry
//! - **infrastructure**: External concerns (database, crypto)
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML application configuration
//! - **server**: Server lifecycle (start, wait, graceful shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;

// Re-export server lifecycle
pub use server::{init_tracing, ServerHandle, ServerOptions};
