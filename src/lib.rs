//! SolveTrack - Submission Analytics Engine
//!
//! This library implements the statistics pipeline of the SolveTrack coding
//! practice platform: it aggregates a user's submission history into a derived
//! statistics record on every request.
//!
//! # Features
//!
//! - Solved counts, success rate, and per-difficulty breakdown
//! - Consecutive-day streak tracking (current and best)
//! - Trailing-week activity graph with zero-filled days
//! - Global leaderboard ranking over all users
//! - Optional best-effort streak cache write-back to the user record
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//! - **Services**: Orchestration of store reads and metric computation
//! - **Analytics**: Pure, synchronous metric calculators
//! - **Repositories**: Database access behind store trait seams
//! - **Models**: Domain models and derived statistics records

pub mod analytics;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::StatisticsService;
