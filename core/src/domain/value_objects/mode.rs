//! Orchestration mode.

use serde::{Deserialize, Serialize};

/// How far the orchestration runs.
///
/// `Check` is the read-only variant used by the UI to decide between the
/// login and home pages: it stops after extraction and only looks the
/// citizen up, never mutating storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Full run: validate, deproc, persist, notify
    Login,
    /// Read-only: validate, deproc, then a lookup
    Check,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Login
    }
}
