//! Upstream call steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three outbound calls the orchestration can make, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Exchange long-lived credentials for a short-lived access token
    Validate,
    /// Exchange the token plus the app/session pair for citizen data
    Deproc,
    /// Best-effort post-login notification
    Notify,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Validate => "validate",
            Step::Deproc => "deproc",
            Step::Notify => "notify",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
