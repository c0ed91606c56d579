//! # Infrastructure Layer
//!
//! Concrete implementations behind the `eg_core` traits:
//!
//! - **Database**: MySQL profile persistence using SQLx
//! - **HTTP**: reqwest client for the upstream eGov service
//!
//! Nothing in this crate makes orchestration decisions; it translates
//! between the domain's traits and the outside world.

pub mod database;
pub mod http;

pub use database::{DatabasePool, MySqlProfileRepository};
pub use http::EgovHttpClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
