//! Difficulty breakdown
//!
//! Tallies a user's distinct solved problems into difficulty buckets using
//! the labels reported by the problem catalog. Problems the catalog has no
//! recognized label for are skipped, never an error.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Difficulty, DifficultyBreakdown};

/// Tally solved problems into difficulty buckets
pub fn tally_breakdown(
    solved: &[Uuid],
    difficulties: &HashMap<Uuid, String>,
) -> DifficultyBreakdown {
    let mut breakdown = DifficultyBreakdown::default();

    for problem_id in solved {
        let Some(label) = difficulties.get(problem_id) else {
            continue;
        };
        match Difficulty::from_label(label) {
            Some(Difficulty::Easy) => breakdown.easy += 1,
            Some(Difficulty::Medium) => breakdown.medium += 1,
            Some(Difficulty::Hard) => breakdown.hard += 1,
            None => {}
        }
    }

    breakdown
}
