//! Main login orchestration implementation.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use eg_shared::utils::mask_secret;

use crate::clients::{EgovClient, StepResult};
use crate::domain::entities::Profile;
use crate::domain::value_objects::{LoginOutcome, LoginRequest, Mode, NotificationStatus, Step};
use crate::errors::{DomainError, DomainResult};
use crate::extract::{extract_citizen, extract_token};
use crate::repositories::ProfileRepository;

use super::config::LoginServiceConfig;

/// Orchestrates the eGov login sequence.
///
/// One run walks `validate -> deproc -> (check: lookup | login: persist ->
/// notify)` strictly in order: deproc needs validate's token, notify needs
/// the persisted `user_id`. The only durable side effect is the profile
/// upsert, and it happens only after deproc fully succeeded, so an aborted
/// run never leaves partial state behind. Notification failures are
/// captured in the outcome's diagnostics channel and never demote a
/// successful login.
pub struct LoginService<C, P>
where
    C: EgovClient,
    P: ProfileRepository,
{
    /// Upstream eGov client
    client: Arc<C>,
    /// Profile store
    profiles: Arc<P>,
    /// Service configuration
    config: LoginServiceConfig,
}

impl<C, P> LoginService<C, P>
where
    C: EgovClient,
    P: ProfileRepository,
{
    /// Create a new login service
    pub fn new(client: Arc<C>, profiles: Arc<P>, config: LoginServiceConfig) -> Self {
        Self {
            client,
            profiles,
            config,
        }
    }

    /// Run the full orchestration for one request.
    ///
    /// # Errors
    ///
    /// * [`DomainError::MissingInput`] - empty `appId` or `mToken`; no
    ///   outbound call is made
    /// * [`DomainError::Configuration`] - eGov credentials not configured
    /// * [`DomainError::UpstreamTransport`] - validate or deproc answered
    ///   non-2xx or not at all
    /// * [`DomainError::UpstreamShape`] - a 2xx body yielded no token or no
    ///   citizen record
    /// * [`DomainError::Database`] - persistence failed (login mode)
    pub async fn login(&self, request: LoginRequest) -> DomainResult<LoginOutcome> {
        let app_id = request.app_id.trim().to_string();
        let m_token = request.m_token.trim().to_string();

        if app_id.is_empty() {
            return Err(DomainError::MissingInput {
                field: "appId".to_string(),
            });
        }
        if m_token.is_empty() {
            return Err(DomainError::MissingInput {
                field: "mToken".to_string(),
            });
        }
        self.client.check_credentials()?;

        let token = self.run_validate().await?;
        let deproc = self.run_deproc(&token, &app_id, &m_token).await?;

        let citizen_payload = deproc.payload.clone().unwrap_or(Value::Null);
        let citizen = extract_citizen(&citizen_payload).ok_or_else(|| {
            warn!("deproc response carried no recognizable citizen record");
            DomainError::UpstreamShape {
                step: Step::Deproc,
                raw: deproc.body_for_diagnostics(),
            }
        })?;
        debug!(citizen_id = %citizen.citizen_id, "extracted citizen record");

        if request.mode == Mode::Check {
            let existing = self.profiles.find_by_citizen_id(&citizen.citizen_id).await?;
            info!(
                citizen_id = %citizen.citizen_id,
                found = existing.is_some(),
                "check-mode lookup complete"
            );
            return Ok(LoginOutcome::Checked {
                found: existing.is_some(),
                data: existing.map(|p| p.summary()),
            });
        }

        let profile = self.profiles.upsert(&citizen, &app_id).await?;
        info!(citizen_id = %profile.citizen_id, "profile persisted");

        let notification = self.send_notification(&token, &app_id, &profile).await;

        Ok(LoginOutcome::LoggedIn {
            data: profile.summary(),
            notification,
        })
    }

    /// Validate step: obtain the access token or fail with the step named.
    async fn run_validate(&self) -> DomainResult<String> {
        let result = self.client.validate().await;
        if !result.ok {
            warn!(status = ?result.http_status, "validate call failed");
            return Err(DomainError::UpstreamTransport {
                step: Step::Validate,
                status: result.http_status,
                body: result.body_for_diagnostics(),
            });
        }

        let token = extract_token(result.payload.as_ref()).ok_or_else(|| {
            warn!("validate response carried no token");
            DomainError::UpstreamShape {
                step: Step::Validate,
                raw: result.body_for_diagnostics(),
            }
        })?;
        debug!(token = %mask_secret(&token), "validate step produced a token");
        Ok(token)
    }

    /// Deproc step: fetch the citizen payload or fail with the step named.
    ///
    /// The full step result is returned so a later shape failure can still
    /// surface the raw body of a 2xx response that was not JSON.
    async fn run_deproc(&self, token: &str, app_id: &str, m_token: &str) -> DomainResult<StepResult> {
        let result = self.client.deproc(token, app_id, m_token).await;
        if !result.ok {
            warn!(status = ?result.http_status, "deproc call failed");
            return Err(DomainError::UpstreamTransport {
                step: Step::Deproc,
                status: result.http_status,
                body: result.body_for_diagnostics(),
            });
        }
        Ok(result)
    }

    /// Notify step. Requires a `user_id`; failures are recorded, never
    /// propagated.
    async fn send_notification(
        &self,
        token: &str,
        app_id: &str,
        profile: &Profile,
    ) -> NotificationStatus {
        let Some(user_id) = profile.user_id.as_deref() else {
            debug!(citizen_id = %profile.citizen_id, "no userId on profile, notification skipped");
            return NotificationStatus::Skipped {
                reason: "profile has no userId".to_string(),
            };
        };

        let result = self
            .client
            .notify(token, app_id, user_id, &self.config.notify_message)
            .await;

        if result.ok {
            info!(citizen_id = %profile.citizen_id, "notification sent");
            NotificationStatus::Sent
        } else {
            let error = result
                .error
                .clone()
                .unwrap_or_else(|| match result.http_status {
                    Some(status) => format!("notify call returned status {}", status),
                    None => "notify call failed".to_string(),
                });
            warn!(citizen_id = %profile.citizen_id, %error, "notification failed");
            NotificationStatus::Failed { error }
        }
    }
}
