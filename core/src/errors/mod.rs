//! Domain-specific error types and error handling.
//!
//! The taxonomy distinguishes client input problems, deployment
//! configuration problems, upstream transport failures (the service
//! answered badly or not at all), upstream shape failures (the service
//! answered 2xx but the body did not contain what the contract promises),
//! and persistence failures. The HTTP boundary maps each variant to a
//! status code; the orchestration itself only ever sees this enum.

use serde_json::Value;
use thiserror::Error;

use crate::domain::value_objects::Step;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required request field was missing or empty. Never triggers an
    /// outbound call.
    #[error("Required field: {field}")]
    MissingInput { field: String },

    /// Required credentials or endpoints are not configured. Fatal until an
    /// operator fixes the deployment.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The upstream call failed at transport level: non-2xx status, network
    /// failure, or timeout.
    #[error("Upstream {step} call failed")]
    UpstreamTransport {
        step: Step,
        /// HTTP status if a response was received at all
        status: Option<u16>,
        /// Upstream body (parsed if possible, raw text otherwise)
        body: Option<Value>,
    },

    /// The upstream call returned 2xx but the body did not yield what the
    /// step needed (no token, no citizen record). Signals contract drift,
    /// not an outage.
    #[error("Upstream {step} response was not in a recognized shape")]
    UpstreamShape {
        step: Step,
        /// Upstream body kept for diagnostics
        raw: Option<Value>,
    },

    /// Persistence failure, fatal to the request.
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Step label used in error envelopes.
    ///
    /// A shape failure on the deproc step is reported as `deproc_parse` to
    /// keep it distinct from a deproc transport failure.
    pub fn step_label(&self) -> Option<&'static str> {
        match self {
            DomainError::UpstreamTransport { step, .. } => Some(step.as_str()),
            DomainError::UpstreamShape { step, .. } => match step {
                Step::Validate => Some("validate"),
                Step::Deproc => Some("deproc_parse"),
                Step::Notify => Some("notify"),
            },
            DomainError::Database { .. } => Some("persist"),
            _ => None,
        }
    }
}

impl From<eg_shared::errors::ConfigError> for DomainError {
    fn from(err: eg_shared::errors::ConfigError) -> Self {
        DomainError::Configuration {
            message: err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
