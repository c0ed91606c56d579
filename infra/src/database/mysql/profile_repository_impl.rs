//! MySQL implementation of the ProfileRepository trait.
//!
//! Backing table:
//!
//! ```sql
//! CREATE TABLE profiles (
//!     citizen_id    VARCHAR(64)  NOT NULL PRIMARY KEY,
//!     user_id       VARCHAR(64)  NULL,
//!     first_name    VARCHAR(255) NULL,
//!     last_name     VARCHAR(255) NULL,
//!     date_of_birth VARCHAR(32)  NULL,
//!     mobile        VARCHAR(32)  NULL,
//!     email         VARCHAR(255) NULL,
//!     notification  VARCHAR(255) NULL,
//!     app_id        VARCHAR(64)  NOT NULL,
//!     created_at    DATETIME(6)  NOT NULL,
//!     updated_at    DATETIME(6)  NOT NULL,
//!     INDEX idx_profiles_updated_at (updated_at)
//! );
//! ```
//!
//! The upsert keys on `citizen_id` and never touches `created_at` on the
//! update path, so repeated logins for one citizen keep a single row with
//! its original creation time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use eg_core::domain::entities::{CitizenRecord, Profile};
use eg_core::errors::DomainError;
use eg_core::repositories::ProfileRepository;

/// MySQL implementation of ProfileRepository
pub struct MySqlProfileRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    /// Create a new MySQL profile repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn db_err(context: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Database {
            message: format!("{}: {}", context, e),
        }
    }

    /// Convert a database row to a Profile entity
    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<Profile, DomainError> {
        Ok(Profile {
            citizen_id: row
                .try_get("citizen_id")
                .map_err(|e| Self::db_err("failed to read citizen_id", e))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| Self::db_err("failed to read user_id", e))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| Self::db_err("failed to read first_name", e))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| Self::db_err("failed to read last_name", e))?,
            date_of_birth: row
                .try_get("date_of_birth")
                .map_err(|e| Self::db_err("failed to read date_of_birth", e))?,
            mobile: row
                .try_get("mobile")
                .map_err(|e| Self::db_err("failed to read mobile", e))?,
            email: row
                .try_get("email")
                .map_err(|e| Self::db_err("failed to read email", e))?,
            notification: row
                .try_get("notification")
                .map_err(|e| Self::db_err("failed to read notification", e))?,
            app_id: row
                .try_get("app_id")
                .map_err(|e| Self::db_err("failed to read app_id", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::db_err("failed to read created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| Self::db_err("failed to read updated_at", e))?,
        })
    }
}

const PROFILE_COLUMNS: &str = "citizen_id, user_id, first_name, last_name, date_of_birth, \
     mobile, email, notification, app_id, created_at, updated_at";

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn find_by_citizen_id(&self, citizen_id: &str) -> Result<Option<Profile>, DomainError> {
        let query = format!(
            "SELECT {} FROM profiles WHERE citizen_id = ? LIMIT 1",
            PROFILE_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(citizen_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::db_err("failed to find profile", e))?;

        match row {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert(&self, record: &CitizenRecord, app_id: &str) -> Result<Profile, DomainError> {
        let now = Utc::now();

        // created_at is set on insert only; the update branch leaves it as
        // the row's original value.
        let query = r#"
            INSERT INTO profiles (
                citizen_id, user_id, first_name, last_name, date_of_birth,
                mobile, email, notification, app_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                user_id = VALUES(user_id),
                first_name = VALUES(first_name),
                last_name = VALUES(last_name),
                date_of_birth = VALUES(date_of_birth),
                mobile = VALUES(mobile),
                email = VALUES(email),
                notification = VALUES(notification),
                app_id = VALUES(app_id),
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(&record.citizen_id)
            .bind(&record.user_id)
            .bind(&record.first_name)
            .bind(&record.last_name)
            .bind(&record.date_of_birth)
            .bind(&record.mobile)
            .bind(&record.email)
            .bind(&record.notification)
            .bind(app_id)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::db_err("failed to upsert profile", e))?;

        self.find_by_citizen_id(&record.citizen_id)
            .await?
            .ok_or_else(|| DomainError::Database {
                message: format!("profile missing after upsert: {}", record.citizen_id),
            })
    }

    async fn find_latest(&self) -> Result<Option<Profile>, DomainError> {
        let query = format!(
            "SELECT {} FROM profiles ORDER BY updated_at DESC LIMIT 1",
            PROFILE_COLUMNS
        );

        let row = sqlx::query(&query)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::db_err("failed to find latest profile", e))?;

        match row {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }
}
