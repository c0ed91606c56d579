//! eGov client trait and per-step result type.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::value_objects::Step;
use crate::errors::DomainError;

/// Transport-level outcome of one upstream call.
///
/// `ok` only says the call completed with a 2xx status; whether the body
/// actually contained a token or a citizen record is decided by the
/// orchestration through the extractors. Failed results keep the upstream
/// status and body so the error envelope can name exactly what came back.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub step: Step,
    pub ok: bool,
    /// HTTP status, absent when the call failed before a response
    pub http_status: Option<u16>,
    /// Parsed JSON body, when the body was valid JSON
    pub payload: Option<Value>,
    /// Raw body text, kept even when parsing failed
    pub raw_text: String,
    /// Transport error message, when no response was received
    pub error: Option<String>,
}

impl StepResult {
    /// Build a result from a received HTTP response.
    pub fn from_http(step: Step, status: u16, payload: Option<Value>, raw_text: String) -> Self {
        Self {
            step,
            ok: (200..300).contains(&status),
            http_status: Some(status),
            payload,
            raw_text,
            error: None,
        }
    }

    /// Build a result for a call that failed before any response arrived
    /// (connect error, timeout, missing endpoint).
    pub fn transport_failure(step: Step, error: impl Into<String>) -> Self {
        Self {
            step,
            ok: false,
            http_status: None,
            payload: None,
            raw_text: String::new(),
            error: Some(error.into()),
        }
    }

    /// Best available representation of the upstream body for diagnostics:
    /// parsed JSON, else raw text, else the transport error.
    pub fn body_for_diagnostics(&self) -> Option<Value> {
        if let Some(payload) = &self.payload {
            return Some(payload.clone());
        }
        if !self.raw_text.trim().is_empty() {
            return Some(Value::String(self.raw_text.clone()));
        }
        self.error.as_ref().map(|e| Value::String(e.clone()))
    }
}

/// Client for the upstream eGov service.
///
/// One implementation speaks HTTP (`eg_infra`); the mock in this crate
/// scripts responses for tests. Credentials live in the implementation's
/// configuration, never in call sites.
#[async_trait]
pub trait EgovClient: Send + Sync {
    /// Check that the required credentials are configured.
    ///
    /// Called at orchestration start so a misconfigured deployment fails
    /// with a configuration error before any outbound call is made.
    fn check_credentials(&self) -> Result<(), DomainError>;

    /// Exchange the configured credentials for a short-lived access token.
    async fn validate(&self) -> StepResult;

    /// Exchange the token and the caller-presented `appId`/`mToken` pair
    /// for the citizen profile payload.
    async fn deproc(&self, token: &str, app_id: &str, m_token: &str) -> StepResult;

    /// Send the post-login notification. Best effort: callers record the
    /// outcome but never fail on it.
    async fn notify(&self, token: &str, app_id: &str, user_id: &str, message: &str) -> StepResult;
}
