//! Request and response data transfer objects.

pub mod egov;

pub use egov::EgovLoginRequest;
