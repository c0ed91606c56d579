//! Upstream eGov service configuration.
//!
//! Credentials and endpoints are supplied through the environment and
//! validated before any orchestration run. Nothing in this module is ever
//! hardcoded into the call sites; a deployment without credentials boots,
//! but every login attempt fails with a configuration error.

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::ConfigError;

/// Field casing used for the deproc request body.
///
/// The upstream contract has been observed with both spellings across
/// environments, so the deployed casing is a configuration detail rather
/// than something this crate decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeprocBodyStyle {
    /// `{"appId": ..., "mToken": ...}`
    Camel,
    /// `{"AppId": ..., "MToken": ...}`
    Pascal,
}

impl DeprocBodyStyle {
    fn from_env_value(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Self::Camel),
            "pascal" | "pascalcase" => Ok(Self::Pascal),
            other => Err(ConfigError::InvalidValue {
                var: "EGOV_DEPROC_BODY_STYLE".to_string(),
                message: format!("expected 'camel' or 'pascal', got '{}'", other),
            }),
        }
    }
}

/// Configuration for the upstream eGov service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EgovConfig {
    /// Consumer key sent as the `Consumer-Key` header on every call
    pub consumer_key: String,
    /// Consumer secret exchanged for an access token on the validate call
    pub consumer_secret: String,
    /// Agent identifier sent alongside the consumer secret
    pub agent_id: String,
    /// Token-request endpoint
    pub validate_url: String,
    /// Citizen-profile endpoint
    pub deproc_url: String,
    /// Notification endpoint; notifications are reported as failed when unset
    pub notify_url: Option<String>,
    /// Field casing for the deproc request body
    pub deproc_body_style: DeprocBodyStyle,
    /// Per-call timeout in seconds
    pub request_timeout_secs: u64,
    /// Message sent with the post-login notification
    pub notify_message: String,
}

const DEFAULT_VALIDATE_URL: &str = "https://api.egov.go.th/ws/auth/validate";
const DEFAULT_DEPROC_URL: &str =
    "https://api.egov.go.th/ws/dga/czp/uat/v1/core/shield/data/deproc";
const DEFAULT_NOTIFY_MESSAGE: &str = "บันทึกสำเร็จ";

impl EgovConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing credentials do not fail the load; they are reported by
    /// [`EgovConfig::validate`] so the server can boot and surface the
    /// problem per request instead of refusing to start.
    pub fn from_env() -> Result<Self, ConfigError> {
        let deproc_body_style = match env::var("EGOV_DEPROC_BODY_STYLE") {
            Ok(value) => DeprocBodyStyle::from_env_value(&value)?,
            Err(_) => DeprocBodyStyle::Camel,
        };

        let request_timeout_secs = match env::var("EGOV_REQUEST_TIMEOUT_SECS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "EGOV_REQUEST_TIMEOUT_SECS".to_string(),
                message: format!("expected an integer number of seconds, got '{}'", value),
            })?,
            Err(_) => 15,
        };

        Ok(Self {
            consumer_key: env::var("EGOV_CONSUMER_KEY").unwrap_or_default(),
            consumer_secret: env::var("EGOV_CONSUMER_SECRET").unwrap_or_default(),
            agent_id: env::var("EGOV_AGENT_ID").unwrap_or_default(),
            validate_url: env::var("EGOV_VALIDATE_URL")
                .unwrap_or_else(|_| DEFAULT_VALIDATE_URL.to_string()),
            deproc_url: env::var("EGOV_DEPROC_URL")
                .unwrap_or_else(|_| DEFAULT_DEPROC_URL.to_string()),
            notify_url: env::var("EGOV_NOTIFY_URL").ok().filter(|v| !v.trim().is_empty()),
            deproc_body_style,
            request_timeout_secs,
            notify_message: env::var("EGOV_NOTIFY_MESSAGE")
                .unwrap_or_else(|_| DEFAULT_NOTIFY_MESSAGE.to_string()),
        })
    }

    /// Check that every required credential is present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.consumer_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential("EGOV_CONSUMER_KEY".to_string()));
        }
        if self.consumer_secret.trim().is_empty() {
            return Err(ConfigError::MissingCredential("EGOV_CONSUMER_SECRET".to_string()));
        }
        if self.agent_id.trim().is_empty() {
            return Err(ConfigError::MissingCredential("EGOV_AGENT_ID".to_string()));
        }
        Ok(())
    }
}
