//! Persisted citizen profile entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::citizen::CitizenRecord;

/// Stored form of a citizen record, keyed by `citizen_id`.
///
/// Created on the first successful login for a citizen; every later login
/// overwrites the mutable fields and refreshes `updated_at` while
/// `created_at` is preserved. Profiles are never deleted by this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable identity key
    pub citizen_id: String,

    pub user_id: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub date_of_birth: Option<String>,

    pub mobile: Option<String>,

    pub email: Option<String>,

    pub notification: Option<String>,

    /// Application identifier the citizen last logged in through
    pub app_id: String,

    /// Set on first insert, never overwritten
    pub created_at: DateTime<Utc>,

    /// Refreshed on every upsert
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build a fresh profile from an extracted record.
    pub fn from_record(record: &CitizenRecord, app_id: &str) -> Self {
        let now = Utc::now();
        Self {
            citizen_id: record.citizen_id.clone(),
            user_id: record.user_id.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            date_of_birth: record.date_of_birth.clone(),
            mobile: record.mobile.clone(),
            email: record.email.clone(),
            notification: record.notification.clone(),
            app_id: app_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields from a newer record and touch
    /// `updated_at`. `created_at` is left alone.
    pub fn apply(&mut self, record: &CitizenRecord, app_id: &str) {
        self.user_id = record.user_id.clone();
        self.first_name = record.first_name.clone();
        self.last_name = record.last_name.clone();
        self.date_of_birth = record.date_of_birth.clone();
        self.mobile = record.mobile.clone();
        self.email = record.email.clone();
        self.notification = record.notification.clone();
        self.app_id = app_id.to_string();
        self.updated_at = Utc::now();
    }

    /// Public-safe projection returned by the HTTP boundary.
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            citizen_id: self.citizen_id.clone(),
            user_id: self.user_id.clone(),
            app_id: self.app_id.clone(),
        }
    }
}

/// Projection of a profile that is safe to return to callers.
///
/// Deliberately excludes contact details and the raw upstream payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub citizen_id: String,
    pub user_id: Option<String>,
    pub app_id: String,
}
