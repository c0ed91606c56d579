//! Citizen record extracted from the upstream deproc response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized citizen profile as extracted from a deproc response.
///
/// Every field except `citizen_id` is optional: the upstream payload shape
/// is not contractually stable and individual fields come and go between
/// environments. A record without a citizen identifier is not persistable
/// and is never constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitizenRecord {
    /// Stable identity key, sourced from the upstream identity provider
    pub citizen_id: String,

    /// Upstream user identifier, required for notifications
    pub user_id: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub date_of_birth: Option<String>,

    pub mobile: Option<String>,

    pub email: Option<String>,

    /// Upstream notification preference, coerced to a string
    pub notification: Option<String>,

    /// The source object the record was extracted from. Diagnostics only;
    /// never consulted for business logic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl CitizenRecord {
    /// Create a record carrying only the identity key.
    pub fn new(citizen_id: impl Into<String>) -> Self {
        Self {
            citizen_id: citizen_id.into(),
            user_id: None,
            first_name: None,
            last_name: None,
            date_of_birth: None,
            mobile: None,
            email: None,
            notification: None,
            raw: None,
        }
    }
}
