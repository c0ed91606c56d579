//! Login orchestration input and outcome types.

use serde::{Deserialize, Serialize};

use super::mode::Mode;
use crate::domain::entities::ProfileSummary;

/// Input to one orchestration run.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    /// Application identifier presented by the caller
    pub app_id: String,
    /// Session token presented by the caller
    pub m_token: String,
    pub mode: Mode,
}

impl LoginRequest {
    pub fn new(app_id: impl Into<String>, m_token: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            m_token: m_token.into(),
            mode: Mode::default(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Result of one successful orchestration run.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Login mode: the profile was persisted
    LoggedIn {
        data: ProfileSummary,
        notification: NotificationStatus,
    },
    /// Check mode: a read-only lookup
    Checked {
        found: bool,
        data: Option<ProfileSummary>,
    },
}

/// Outcome of the best-effort notification step.
///
/// This is a detached diagnostics channel: the orchestration records it in
/// the envelope but never consults it for control flow, so a notify failure
/// can never demote a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NotificationStatus {
    Sent,
    Skipped { reason: String },
    Failed { error: String },
}
