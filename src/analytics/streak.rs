//! Streak calculator
//!
//! Streaks count consecutive UTC calendar days with at least one submission.
//! Both values are derived from the same distinct-date set: the current
//! streak is itself a run of consecutive days in that set, so
//! `max >= current` holds whenever the current streak is non-zero.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::models::Submission;
use crate::utils::time::utc_day;

/// Current and best consecutive-day streaks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    pub current: u32,
    pub max: u32,
}

/// Reduce submissions to their set of distinct activity dates
///
/// Duplicate same-day submissions collapse to one date.
pub fn activity_dates(submissions: &[Submission]) -> BTreeSet<NaiveDate> {
    submissions.iter().map(|s| utc_day(s.submitted_at)).collect()
}

/// Compute current and max streaks from a set of distinct activity dates
///
/// `today` is passed in rather than read from the clock so results are
/// reproducible for a given evaluation date.
pub fn compute(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakSummary {
    StreakSummary {
        current: current_streak(dates, today),
        max: max_streak(dates),
    }
}

/// Days ending at today (or yesterday, when not yet extended today) that form
/// an unbroken run. 0 when the most recent activity is older than yesterday.
fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);

    let anchor = if dates.contains(&today) {
        today
    } else if dates.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 1;
    let mut day = anchor - Duration::days(1);
    while dates.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }

    streak
}

/// Longest run of consecutive dates anywhere in the set
fn max_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut max = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for &date in dates {
        run = match prev {
            Some(p) if date - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        max = max.max(run);
        prev = Some(date);
    }

    max
}
