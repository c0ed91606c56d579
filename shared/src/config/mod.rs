//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `egov` - Upstream eGov service endpoints and credentials
//! - `database` - Database connection and pool configuration
//! - `server` - HTTP server binding configuration

pub mod database;
pub mod egov;
pub mod server;

pub use database::DatabaseConfig;
pub use egov::{DeprocBodyStyle, EgovConfig};
pub use server::ServerConfig;
