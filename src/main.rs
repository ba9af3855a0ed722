//! SolveTrack - Analytics CLI
//!
//! Operational entry point for the analytics engine: computes a user's
//! statistics record or the global leaderboard against the configured
//! database and prints the result as JSON.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solvetrack::{
    config::CONFIG,
    constants::DEFAULT_LEADERBOARD_LIMIT,
    db::{
        self,
        repositories::{PgProblemRepository, PgSubmissionRepository, PgUserRepository},
    },
    StatisticsService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_default();

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&CONFIG.database).await?;
    db::ping(&pool).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await?;

    let service = StatisticsService::new(
        Arc::new(PgSubmissionRepository::new(pool.clone())),
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgProblemRepository::new(pool)),
        &CONFIG.analytics,
    );

    match command.as_str() {
        "stats" => {
            let user_id = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("usage: solvetrack stats <user-id>"))?;
            let stats = service.get_user_statistics(&user_id).await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        "leaderboard" => {
            let limit = match args.next() {
                Some(raw) => raw.parse()?,
                None => DEFAULT_LEADERBOARD_LIMIT,
            };
            let board = service.get_leaderboard(limit).await?;
            println!("{}", serde_json::to_string_pretty(&board)?);
        }
        _ => {
            eprintln!("usage: solvetrack <stats <user-id> | leaderboard [limit]>");
            std::process::exit(2);
        }
    }

    Ok(())
}
