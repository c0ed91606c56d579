//! Mock implementation of ProfileRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{CitizenRecord, Profile};
use crate::errors::DomainError;

use super::repository::ProfileRepository;

/// In-memory profile repository for tests.
pub struct MockProfileRepository {
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
    fail_writes: AtomicBool,
}

impl MockProfileRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every `upsert` fail with a database error.
    pub fn failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::SeqCst);
        self
    }

    /// Number of stored profiles.
    pub async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

impl Default for MockProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_by_citizen_id(&self, citizen_id: &str) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(citizen_id).cloned())
    }

    async fn upsert(&self, record: &CitizenRecord, app_id: &str) -> Result<Profile, DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "simulated write failure".to_string(),
            });
        }

        let mut profiles = self.profiles.write().await;
        let profile = match profiles.get_mut(&record.citizen_id) {
            Some(existing) => {
                existing.apply(record, app_id);
                existing.clone()
            }
            None => {
                let profile = Profile::from_record(record, app_id);
                profiles.insert(record.citizen_id.clone(), profile.clone());
                profile
            }
        };
        Ok(profile)
    }

    async fn find_latest(&self) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles
            .values()
            .max_by_key(|p| p.updated_at)
            .cloned())
    }
}
