use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::stats::StatsService};

/// Midnight UTC, every day.
const DAILY_RESET_CRON: &str = "0 0 0 * * *";

/// Every 15 minutes, so a restart loses at most that much of the live day.
const CHECKPOINT_CRON: &str = "0 */15 * * * *";

/// Starts the daily rollover scheduler
///
/// At every UTC midnight the live aggregate is archived (or the week cleared
/// on Sunday) and a new day begins. In between, the live aggregate is
/// checkpointed so `StatsService::load` can restore it after a restart.
///
/// # Arguments
/// - `stats`: Owner of the live daily aggregate
pub async fn start_scheduler(stats: StatsService) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let reset_stats = stats.clone();
    let job = Job::new_async(DAILY_RESET_CRON, move |_uuid, _lock| {
        let stats = reset_stats.clone();

        Box::pin(async move {
            tracing::info!("Rolling over daily stats");
            if let Err(e) = stats.rollover().await {
                tracing::error!("Daily stats rollover failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;

    let checkpoint = Job::new_async(CHECKPOINT_CRON, move |_uuid, _lock| {
        let stats = stats.clone();

        Box::pin(async move {
            if let Err(e) = stats.checkpoint().await {
                tracing::warn!("Daily stats checkpoint failed: {}", e);
            }
        })
    })?;

    scheduler.add(checkpoint).await?;
    scheduler.start().await?;

    tracing::info!("Daily reset scheduler started");

    Ok(())
}
