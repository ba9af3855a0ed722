//! Submission repository

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::SubmissionStore;
use crate::error::AppResult;
use crate::models::Submission;

/// PostgreSQL-backed submission store
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionRepository {
    async fn fetch_by_user(&self, user_id: &Uuid) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, user_id, problem_id, status, execution_time_ms, memory_used_kb, submitted_at
            FROM submissions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    async fn fetch_all(&self) -> AppResult<Vec<Submission>> {
        // The full table can be large; stream rows out of the driver instead
        // of asking it to buffer the whole result set.
        let mut rows = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, user_id, problem_id, status, execution_time_ms, memory_used_kb, submitted_at
            FROM submissions
            "#,
        )
        .fetch(&self.pool);

        let mut submissions = Vec::new();
        while let Some(submission) = rows.try_next().await? {
            submissions.push(submission);
        }

        Ok(submissions)
    }
}
