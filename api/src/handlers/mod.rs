//! HTTP-level error mapping.

pub mod error;

pub use error::error_response;
