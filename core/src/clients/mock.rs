//! Mock implementation of EgovClient for testing

use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

use crate::domain::value_objects::Step;
use crate::errors::DomainError;

use super::egov::{EgovClient, StepResult};

/// Scripted eGov client for tests.
///
/// Defaults to a fully successful three-step sequence with the canned
/// bodies below; individual steps can be overridden per test. Every call
/// is recorded so tests can assert which steps ran and in what order.
pub struct MockEgovClient {
    validate_response: StepResult,
    deproc_response: StepResult,
    notify_response: StepResult,
    credentials_ok: bool,
    calls: Mutex<Vec<Step>>,
}

impl MockEgovClient {
    pub fn new() -> Self {
        Self {
            validate_response: StepResult::from_http(
                Step::Validate,
                200,
                Some(json!({"result": "tok-1234567890"})),
                "{\"result\":\"tok-1234567890\"}".to_string(),
            ),
            deproc_response: StepResult::from_http(
                Step::Deproc,
                200,
                Some(json!({
                    "data": {
                        "CitizenID": "C9",
                        "UserID": "U1",
                        "FirstName": "Somchai",
                        "LastName": "Jaidee"
                    }
                })),
                String::new(),
            ),
            notify_response: StepResult::from_http(Step::Notify, 200, Some(json!({})), String::new()),
            credentials_ok: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Override the validate step response.
    pub fn with_validate(mut self, response: StepResult) -> Self {
        self.validate_response = response;
        self
    }

    /// Override the deproc step response.
    pub fn with_deproc(mut self, response: StepResult) -> Self {
        self.deproc_response = response;
        self
    }

    /// Override the notify step response.
    pub fn with_notify(mut self, response: StepResult) -> Self {
        self.notify_response = response;
        self
    }

    /// Make `check_credentials` fail as if the deployment were missing its
    /// eGov credentials.
    pub fn without_credentials(mut self) -> Self {
        self.credentials_ok = false;
        self
    }

    /// Steps invoked so far, in call order.
    pub fn calls(&self) -> Vec<Step> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made for one step.
    pub fn call_count(&self, step: Step) -> usize {
        self.calls.lock().unwrap().iter().filter(|s| **s == step).count()
    }

    fn record(&self, step: Step) {
        self.calls.lock().unwrap().push(step);
    }
}

impl Default for MockEgovClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EgovClient for MockEgovClient {
    fn check_credentials(&self) -> Result<(), DomainError> {
        if self.credentials_ok {
            Ok(())
        } else {
            Err(DomainError::Configuration {
                message: "Missing credential: EGOV_CONSUMER_KEY".to_string(),
            })
        }
    }

    async fn validate(&self) -> StepResult {
        self.record(Step::Validate);
        self.validate_response.clone()
    }

    async fn deproc(&self, _token: &str, _app_id: &str, _m_token: &str) -> StepResult {
        self.record(Step::Deproc);
        self.deproc_response.clone()
    }

    async fn notify(&self, _token: &str, _app_id: &str, _user_id: &str, _message: &str) -> StepResult {
        self.record(Step::Notify);
        self.notify_response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let client = MockEgovClient::new();
        let _ = client.validate().await;
        let _ = client.deproc("tok", "A1", "M1").await;
        let _ = client.notify("tok", "A1", "U1", "hello").await;

        assert_eq!(client.calls(), vec![Step::Validate, Step::Deproc, Step::Notify]);
        assert_eq!(client.call_count(Step::Validate), 1);
    }

    #[tokio::test]
    async fn default_script_is_a_successful_run() {
        let client = MockEgovClient::new();
        assert!(client.check_credentials().is_ok());
        assert!(client.validate().await.ok);
        assert!(client.deproc("tok", "A1", "M1").await.ok);
    }

    #[test]
    fn without_credentials_fails_the_check() {
        let client = MockEgovClient::new().without_credentials();
        assert!(matches!(
            client.check_credentials(),
            Err(DomainError::Configuration { .. })
        ));
    }
}
