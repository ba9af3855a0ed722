//! Derived statistics models
//!
//! Everything in this module is recomputed per request from the submission
//! collection; nothing here has independent persistence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user statistics record returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub user_id: Uuid,
    /// Distinct problems with at least one accepted submission
    pub total_solved: u64,
    pub total_submissions: u64,
    /// `100 * accepted / total`, 0 when the user has no submissions
    pub success_rate: f64,
    pub difficulty_breakdown: DifficultyBreakdown,
    /// One entry per day of the trailing window, zero-count days included
    pub activity_graph: Vec<ActivityPoint>,
    /// 1-based global rank; 0 when the user has no submissions
    pub ranking: u64,
    pub current_streak: u32,
    pub max_streak: u32,
}

/// Count of distinct solved problems per difficulty bucket
///
/// Problems with an unrecognized or missing difficulty are not counted, so
/// the bucket total may be less than `total_solved`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBreakdown {
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
}

impl DifficultyBreakdown {
    /// Sum over all buckets
    pub fn total(&self) -> u64 {
        self.easy + self.medium + self.hard
    }
}

/// One day of the activity graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub date: NaiveDate,
    pub count: u64,
}

/// One row of the global leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub total_solved: u64,
    pub success_rate: f64,
    pub rank: u64,
}
