//! Statistics service
//!
//! Orchestrates the statistics pipeline: read the user's submission history,
//! run the pure calculators over it, and merge the results into one derived
//! record. The service is request-scoped and stateless between calls; two
//! calls with the same underlying data produce the same record.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::analytics::{activity, difficulty, ranking, streak};
use crate::config::AnalyticsConfig;
use crate::constants::MAX_LEADERBOARD_LIMIT;
use crate::db::{ProblemCatalog, SubmissionStore, UserStore};
use crate::error::{AppError, AppResult};
use crate::models::{DifficultyBreakdown, LeaderboardEntry, Submission, UserStatistics};
use crate::utils::{time, validation};

/// Statistics service for derived user metrics
pub struct StatisticsService {
    submissions: Arc<dyn SubmissionStore>,
    users: Arc<dyn UserStore>,
    catalog: Arc<dyn ProblemCatalog>,
    activity_window_days: u32,
    streak_writeback: bool,
}

impl StatisticsService {
    pub fn new(
        submissions: Arc<dyn SubmissionStore>,
        users: Arc<dyn UserStore>,
        catalog: Arc<dyn ProblemCatalog>,
        config: &AnalyticsConfig,
    ) -> Self {
        Self {
            submissions,
            users,
            catalog,
            activity_window_days: config.activity_window_days,
            streak_writeback: config.streak_writeback,
        }
    }

    /// Compute the full statistics record for one user
    ///
    /// A user with zero submissions gets a zero-valued record, not an error;
    /// only an unknown user id is `NotFound`.
    pub async fn get_user_statistics(&self, user_id: &str) -> AppResult<UserStatistics> {
        let id = validation::parse_user_id(user_id)?;

        self.users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;

        let submissions = self.submissions.fetch_by_user(&id).await?;
        let today = time::today_utc();

        let total_submissions = submissions.len() as u64;
        let accepted = submissions.iter().filter(|s| s.is_accepted()).count() as u64;
        let success_rate = ranking::success_rate(accepted, total_submissions);

        let solved = distinct_solved(&submissions);
        let difficulty_breakdown = if solved.is_empty() {
            DifficultyBreakdown::default()
        } else {
            let difficulties = self.catalog.fetch_difficulties(&solved).await?;
            difficulty::tally_breakdown(&solved, &difficulties)
        };

        let dates = streak::activity_dates(&submissions);
        let streaks = streak::compute(&dates, today);
        let activity_graph =
            activity::activity_window(&submissions, today, self.activity_window_days);

        // A user with no submissions is absent from the grouped set and
        // therefore unranked; skip the system-wide read entirely.
        let ranking = if submissions.is_empty() {
            0
        } else {
            let all = self.submissions.fetch_all().await?;
            let tallies = ranking::tally_users(&all);
            ranking::rank_of(&id, &tallies)
        };

        if self.streak_writeback && !submissions.is_empty() {
            self.spawn_streak_writeback(id, streaks, &submissions);
        }

        Ok(UserStatistics {
            user_id: id,
            total_solved: solved.len() as u64,
            total_submissions,
            success_rate,
            difficulty_breakdown,
            activity_graph,
            ranking,
            current_streak: streaks.current,
            max_streak: streaks.max,
        })
    }

    /// Top of the global ranking, at most `limit` entries
    pub async fn get_leaderboard(&self, limit: usize) -> AppResult<Vec<LeaderboardEntry>> {
        let limit = limit.clamp(1, MAX_LEADERBOARD_LIMIT);

        let all = self.submissions.fetch_all().await?;
        let tallies = ranking::tally_users(&all);

        Ok(tallies
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, tally)| LeaderboardEntry {
                user_id: tally.user_id,
                total_solved: tally.total_solved,
                success_rate: tally.success_rate,
                rank: index as u64 + 1,
            })
            .collect())
    }

    /// Write the freshly computed streaks onto the user record off the
    /// request path. Failures are logged and never surface to the caller.
    fn spawn_streak_writeback(
        &self,
        user_id: Uuid,
        streaks: streak::StreakSummary,
        submissions: &[Submission],
    ) {
        let last_active_at = submissions.iter().map(|s| s.submitted_at).max();
        let users = Arc::clone(&self.users);

        tokio::spawn(async move {
            if let Err(err) = users
                .update_cached_streak(&user_id, streaks.current, streaks.max, last_active_at)
                .await
            {
                tracing::warn!(user_id = %user_id, error = %err, "streak cache write-back failed");
            }
        });
    }
}

/// Distinct problem ids with at least one accepted submission
fn distinct_solved(submissions: &[Submission]) -> Vec<Uuid> {
    let set: HashSet<Uuid> = submissions
        .iter()
        .filter(|s| s.is_accepted())
        .map(|s| s.problem_id)
        .collect();

    set.into_iter().collect()
}
