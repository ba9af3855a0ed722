//! Ranking aggregator
//!
//! Groups the system-wide submission history by user and orders users by
//! distinct solved count, then success rate, then user id. The id tie-break
//! keeps ranks reproducible across calls with identical input.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::Submission;

/// Aggregated standing of one user
#[derive(Debug, Clone, PartialEq)]
pub struct UserTally {
    pub user_id: Uuid,
    /// Distinct problems with at least one accepted submission
    pub total_solved: u64,
    pub success_rate: f64,
}

#[derive(Default)]
struct Group {
    total: u64,
    accepted: u64,
    solved: HashSet<Uuid>,
}

/// Aggregate all submissions into per-user tallies, best first
pub fn tally_users(submissions: &[Submission]) -> Vec<UserTally> {
    let mut groups: HashMap<Uuid, Group> = HashMap::new();

    for submission in submissions {
        let group = groups.entry(submission.user_id).or_default();
        group.total += 1;
        if submission.is_accepted() {
            group.accepted += 1;
            group.solved.insert(submission.problem_id);
        }
    }

    let mut tallies: Vec<UserTally> = groups
        .into_iter()
        .map(|(user_id, group)| UserTally {
            user_id,
            total_solved: group.solved.len() as u64,
            success_rate: success_rate(group.accepted, group.total),
        })
        .collect();

    tallies.sort_by(|a, b| {
        b.total_solved
            .cmp(&a.total_solved)
            .then_with(|| b.success_rate.total_cmp(&a.success_rate))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    tallies
}

/// 1-based rank of a user in the aggregated ordering; 0 when absent
pub fn rank_of(user_id: &Uuid, tallies: &[UserTally]) -> u64 {
    tallies
        .iter()
        .position(|t| t.user_id == *user_id)
        .map(|pos| pos as u64 + 1)
        .unwrap_or(0)
}

/// `100 * accepted / total`, 0 for an empty group
pub fn success_rate(accepted: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * accepted as f64 / total as f64
    }
}
