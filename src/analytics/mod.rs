//! Metric calculators
//!
//! Pure, synchronous reductions over submission data. Nothing in this module
//! touches the store or holds state between calls; every function is a plain
//! transformation of its inputs, which is what keeps statistics requests
//! idempotent and free of coordination.

pub mod activity;
pub mod difficulty;
pub mod ranking;
pub mod streak;

pub use activity::activity_window;
pub use difficulty::tally_breakdown;
pub use ranking::{rank_of, tally_users, UserTally};
pub use streak::{activity_dates, StreakSummary};
