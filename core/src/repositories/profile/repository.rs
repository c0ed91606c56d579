//! Profile repository trait defining the interface for profile persistence.

use async_trait::async_trait;

use crate::domain::entities::{CitizenRecord, Profile};
use crate::errors::DomainError;

/// Repository contract for persisted citizen profiles.
///
/// One record per citizen, keyed by `citizen_id`. Implementations must make
/// `upsert` atomic per key so two concurrent logins for the same citizen
/// converge (last-writer-wins on mutable fields is acceptable); `created_at`
/// is set exactly once, on first insert. This service never deletes.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by its citizen identifier.
    ///
    /// # Returns
    /// * `Ok(Some(Profile))` - Profile found
    /// * `Ok(None)` - No profile stored for this citizen
    /// * `Err(DomainError)` - Storage error
    async fn find_by_citizen_id(&self, citizen_id: &str) -> Result<Option<Profile>, DomainError>;

    /// Insert or update the profile for the record's citizen.
    ///
    /// On first insert both timestamps are set; on update the mutable
    /// fields and `app_id` are overwritten and `updated_at` refreshed while
    /// `created_at` is preserved.
    async fn upsert(&self, record: &CitizenRecord, app_id: &str) -> Result<Profile, DomainError>;

    /// The most recently updated profile, if any exists.
    async fn find_latest(&self) -> Result<Option<Profile>, DomainError>;
}
