//! Taxi Service - fleet registry for a taxi company.
//!
//! Manufacturers, cars and drivers, the many-to-many assignment of drivers
//! to cars, and case-insensitive search over all three.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **services**: Use cases, including the generic [`services::Resource`]
//! - **infra**: Database, migrations, repositories and session storage
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//!
//! Entities and value objects live in the `domain` crate, the HTTP error
//! type in `common`.
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use common::{AppError, AppResult};
pub use config::Config;
pub use infra::{Cache, Database};
