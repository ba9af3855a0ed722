//! User repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::UserStore;
use crate::error::AppResult;
use crate::models::User;

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn find_by_id(&self, user_id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn update_cached_streak(
        &self,
        user_id: &Uuid,
        current_streak: u32,
        max_streak: u32,
        last_active_at: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET
                current_streak = $2,
                max_streak = $3,
                last_active_at = COALESCE($4, last_active_at),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(current_streak as i32)
        .bind(max_streak as i32)
        .bind(last_active_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
