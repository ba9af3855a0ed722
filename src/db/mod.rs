//! Database module
//!
//! This module defines the store boundaries the engine consumes and their
//! PostgreSQL implementations. The traits are the seams callers and tests
//! plug alternative stores into; the engine itself never cares where the
//! rows come from.

pub mod connection;
pub mod repositories;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Submission, User};

pub use connection::*;

/// Read access to the submission collection
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// All submissions of one user; empty when the user has none
    async fn fetch_by_user(&self, user_id: &Uuid) -> AppResult<Vec<Submission>>;

    /// Every submission in the system, used by the ranking aggregator
    async fn fetch_all(&self) -> AppResult<Vec<Submission>>;
}

/// Difficulty lookups against the problem catalog
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProblemCatalog: Send + Sync {
    /// Difficulty labels for the given problems; problems without a recorded
    /// difficulty are absent from the map
    async fn fetch_difficulties(&self, problem_ids: &[Uuid]) -> AppResult<HashMap<Uuid, String>>;
}

/// User record access
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, user_id: &Uuid) -> AppResult<Option<User>>;

    /// Best-effort streak cache write-back; callers must not let a failure
    /// here fail a read
    async fn update_cached_streak(
        &self,
        user_id: &Uuid,
        current_streak: u32,
        max_streak: u32,
        last_active_at: Option<DateTime<Utc>>,
    ) -> AppResult<()>;
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
