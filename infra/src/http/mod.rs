//! HTTP client for the upstream eGov service.

pub mod egov_client;
pub mod response_reader;

pub use egov_client::EgovHttpClient;
pub use response_reader::{read_body, BodySnapshot};
