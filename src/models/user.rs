//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User database model
///
/// `current_streak`, `max_streak`, and `last_active_at` are a best-effort
/// cache of the streak calculator's output. The statistics read path never
/// consults them; stale or missing values only affect surfaces that choose to
/// read the cache instead of recomputing.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub current_streak: i32,
    pub max_streak: i32,
    pub last_active_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user has ever been active
    pub fn has_activity(&self) -> bool {
        self.last_active_at.is_some()
    }
}
