//! reqwest implementation of the eGov client.
//!
//! Speaks the three upstream endpoints:
//!
//! - `validate`: GET with `ConsumerSecret` and `AgentID` query parameters
//!   and the `Consumer-Key` header, returning an access token
//! - `deproc`: POST with `Consumer-Key` and `Token` headers and the
//!   caller's `appId`/`mToken` pair in the body
//! - `notify`: POST with the same headers and a message envelope
//!
//! Every call is folded into a [`StepResult`]; transport failures never
//! escape as errors here, the orchestration decides what they mean.

use chrono::Utc;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

use eg_core::clients::{EgovClient, StepResult};
use eg_core::domain::value_objects::Step;
use eg_core::errors::DomainError;
use eg_shared::config::{DeprocBodyStyle, EgovConfig};
use eg_shared::utils::mask_secret;

use crate::http::response_reader::read_body;
use crate::InfrastructureError;

const CONSUMER_KEY_HEADER: &str = "Consumer-Key";
const TOKEN_HEADER: &str = "Token";
const SEND_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// HTTP client for the upstream eGov service.
pub struct EgovHttpClient {
    http: reqwest::Client,
    config: EgovConfig,
}

impl EgovHttpClient {
    /// Create a client from configuration.
    ///
    /// The per-call timeout comes from the configuration; credentials are
    /// not checked here so a misconfigured deployment can still boot.
    pub fn new(config: EgovConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        debug!(
            consumer_key = %mask_secret(&config.consumer_key),
            validate_url = %config.validate_url,
            "egov http client created"
        );
        Ok(Self { http, config })
    }

    /// Fold a sent request into a step result.
    async fn finish(&self, step: Step, sent: Result<reqwest::Response, reqwest::Error>) -> StepResult {
        match sent {
            Ok(response) => {
                let (status, body) = read_body(response).await;
                debug!(step = %step, status, "egov call completed");
                StepResult::from_http(step, status, body.json, body.text)
            }
            Err(e) => {
                warn!(step = %step, error = %e, "egov call failed in transit");
                StepResult::transport_failure(step, e.to_string())
            }
        }
    }

    fn deproc_body(&self, app_id: &str, m_token: &str) -> serde_json::Value {
        match self.config.deproc_body_style {
            DeprocBodyStyle::Camel => json!({ "appId": app_id, "mToken": m_token }),
            DeprocBodyStyle::Pascal => json!({ "AppId": app_id, "MToken": m_token }),
        }
    }
}

#[async_trait::async_trait]
impl EgovClient for EgovHttpClient {
    fn check_credentials(&self) -> Result<(), DomainError> {
        self.config.validate().map_err(DomainError::from)
    }

    async fn validate(&self) -> StepResult {
        let sent = self
            .http
            .get(&self.config.validate_url)
            .query(&[
                ("ConsumerSecret", self.config.consumer_secret.as_str()),
                ("AgentID", self.config.agent_id.as_str()),
            ])
            .header(CONSUMER_KEY_HEADER, &self.config.consumer_key)
            .send()
            .await;
        self.finish(Step::Validate, sent).await
    }

    async fn deproc(&self, token: &str, app_id: &str, m_token: &str) -> StepResult {
        debug!(token = %mask_secret(token), app_id, "calling deproc");
        let sent = self
            .http
            .post(&self.config.deproc_url)
            .header(CONSUMER_KEY_HEADER, &self.config.consumer_key)
            .header(TOKEN_HEADER, token)
            .json(&self.deproc_body(app_id, m_token))
            .send()
            .await;
        self.finish(Step::Deproc, sent).await
    }

    async fn notify(&self, token: &str, app_id: &str, user_id: &str, message: &str) -> StepResult {
        let Some(notify_url) = self.config.notify_url.as_deref() else {
            return StepResult::transport_failure(Step::Notify, "notify endpoint not configured");
        };

        let body = json!({
            "appId": app_id,
            "data": [{ "message": message, "userId": user_id }],
            "sendDateTime": Utc::now().format(SEND_DATE_TIME_FORMAT).to_string(),
        });

        let sent = self
            .http
            .post(notify_url)
            .header(CONSUMER_KEY_HEADER, &self.config.consumer_key)
            .header(TOKEN_HEADER, token)
            .json(&body)
            .send()
            .await;
        self.finish(Step::Notify, sent).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EgovConfig {
        EgovConfig {
            consumer_key: "ck-test".to_string(),
            consumer_secret: "cs-test".to_string(),
            agent_id: "agent-1".to_string(),
            validate_url: "http://127.0.0.1:1/validate".to_string(),
            deproc_url: "http://127.0.0.1:1/deproc".to_string(),
            notify_url: None,
            deproc_body_style: DeprocBodyStyle::Camel,
            request_timeout_secs: 1,
            notify_message: "บันทึกสำเร็จ".to_string(),
        }
    }

    #[test]
    fn deproc_body_follows_the_configured_casing() {
        let client = EgovHttpClient::new(config()).unwrap();
        let body = client.deproc_body("A1", "M1");
        assert_eq!(body["appId"], "A1");
        assert_eq!(body["mToken"], "M1");

        let mut pascal = config();
        pascal.deproc_body_style = DeprocBodyStyle::Pascal;
        let client = EgovHttpClient::new(pascal).unwrap();
        let body = client.deproc_body("A1", "M1");
        assert_eq!(body["AppId"], "A1");
        assert_eq!(body["MToken"], "M1");
    }

    #[tokio::test]
    async fn missing_notify_url_is_a_transport_failure() {
        let client = EgovHttpClient::new(config()).unwrap();
        let result = client.notify("tok", "A1", "U1", "hello").await;
        assert!(!result.ok);
        assert_eq!(result.step, Step::Notify);
        assert!(result.error.unwrap().contains("not configured"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_folds_into_a_transport_failure() {
        let client = EgovHttpClient::new(config()).unwrap();
        let result = client.validate().await;
        assert!(!result.ok);
        assert_eq!(result.http_status, None);
        assert!(result.error.is_some());
    }

    #[test]
    fn credentials_check_reflects_configuration() {
        let client = EgovHttpClient::new(config()).unwrap();
        assert!(client.check_credentials().is_ok());

        let mut incomplete = config();
        incomplete.consumer_secret = String::new();
        let client = EgovHttpClient::new(incomplete).unwrap();
        assert!(matches!(
            client.check_credentials(),
            Err(DomainError::Configuration { .. })
        ));
    }
}
