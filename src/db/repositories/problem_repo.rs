//! Problem repository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::ProblemCatalog;
use crate::error::AppResult;

/// PostgreSQL-backed problem catalog
#[derive(Clone)]
pub struct PgProblemRepository {
    pool: PgPool,
}

impl PgProblemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProblemCatalog for PgProblemRepository {
    async fn fetch_difficulties(&self, problem_ids: &[Uuid]) -> AppResult<HashMap<Uuid, String>> {
        if problem_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            SELECT id, difficulty FROM problems
            WHERE id = ANY($1) AND difficulty IS NOT NULL
            "#,
        )
        .bind(problem_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
