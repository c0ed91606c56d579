//! HTTP route handlers.

pub mod egov;
pub mod health;
pub mod profile;

pub use egov::AppState;
