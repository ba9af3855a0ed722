//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::statuses;

/// Submission database model
///
/// Submissions are append-only: once created they never change, which is what
/// makes per-request recomputation of statistics idempotent.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub status: String,
    pub execution_time_ms: f64,
    pub memory_used_kb: i64,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Check if this submission solved its problem
    pub fn is_accepted(&self) -> bool {
        self.status == statuses::ACCEPTED
    }
}

/// Submission outcome enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Accepted,
    Failed,
    Error,
}

impl Status {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => statuses::ACCEPTED,
            Self::Failed => statuses::FAILED,
            Self::Error => statuses::ERROR,
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            statuses::ACCEPTED => Some(Self::Accepted),
            statuses::FAILED => Some(Self::Failed),
            statuses::ERROR => Some(Self::Error),
            _ => None,
        }
    }

    /// Check if this status means the solution was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
