//! Activity graph
//!
//! Per-day submission counts over a trailing window ending today. Unlike the
//! streak calculator this counts every submission, not distinct days.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::models::{ActivityPoint, Submission};
use crate::utils::time::utc_day;

/// Build the zero-filled trailing activity window
///
/// Returns exactly `window_days` entries in ascending date order, the last
/// entry being `today`. Submissions outside the window are ignored.
pub fn activity_window(
    submissions: &[Submission],
    today: NaiveDate,
    window_days: u32,
) -> Vec<ActivityPoint> {
    let mut counts: HashMap<NaiveDate, u64> = HashMap::new();
    for submission in submissions {
        *counts.entry(utc_day(submission.submitted_at)).or_default() += 1;
    }

    (0..window_days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            ActivityPoint {
                date,
                count: counts.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn submission_on(y: i32, m: u32, d: u32, h: u32) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            problem_id: Uuid::new_v4(),
            status: "accepted".to_string(),
            execution_time_ms: 5.0,
            memory_used_kb: 512,
            submitted_at: Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_history_is_zero_filled() {
        let graph = activity_window(&[], date(2024, 1, 10), 7);
        assert_eq!(graph.len(), 7);
        assert_eq!(graph[0].date, date(2024, 1, 4));
        assert_eq!(graph[6].date, date(2024, 1, 10));
        assert!(graph.iter().all(|p| p.count == 0));
    }

    #[test]
    fn test_counts_per_day() {
        let submissions = vec![
            submission_on(2024, 1, 10, 1),
            submission_on(2024, 1, 10, 14),
            submission_on(2024, 1, 8, 9),
        ];
        let graph = activity_window(&submissions, date(2024, 1, 10), 7);

        assert_eq!(graph.len(), 7);
        assert_eq!(graph[6], ActivityPoint { date: date(2024, 1, 10), count: 2 });
        assert_eq!(graph[4], ActivityPoint { date: date(2024, 1, 8), count: 1 });
        assert_eq!(graph[5].count, 0);
    }

    #[test]
    fn test_out_of_window_submissions_ignored() {
        let submissions = vec![
            submission_on(2024, 1, 1, 12),
            submission_on(2024, 1, 10, 12),
        ];
        let graph = activity_window(&submissions, date(2024, 1, 10), 7);

        let total: u64 = graph.iter().map(|p| p.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_each_date_appears_once() {
        let graph = activity_window(&[], date(2024, 3, 1), 7);
        let mut dates: Vec<NaiveDate> = graph.iter().map(|p| p.date).collect();
        dates.dedup();
        assert_eq!(dates.len(), 7);
    }
}
