use serenity::all::{ActivityData, Context};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::stats::StatsService};

/// Starts the presence rotation scheduler
///
/// Every minute the bot's activity alternates between the week's and today's
/// process-wide totals.
///
/// # Arguments
/// - `stats`: Source of the totals
/// - `ctx`: Discord context of the shard whose presence is updated
pub async fn start_scheduler(stats: StatsService, ctx: Context) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let show_weekly = Arc::new(AtomicBool::new(true));

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let stats = stats.clone();
        let ctx = ctx.clone();
        let show_weekly = show_weekly.clone();

        Box::pin(async move {
            let weekly = show_weekly.fetch_xor(true, Ordering::Relaxed);
            let text = if weekly {
                match stats.total_weekly().await {
                    Ok(total) => presence_text(true, total),
                    Err(e) => {
                        tracing::warn!("Failed to read weekly total for presence: {}", e);
                        return;
                    }
                }
            } else {
                presence_text(false, stats.total_today().await)
            };

            ctx.set_activity(Some(ActivityData::playing(text)));
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Presence scheduler started");

    Ok(())
}

fn presence_text(weekly: bool, total: i64) -> String {
    if weekly {
        format!("{} farmed this week", total)
    } else {
        format!("{} farmed today", total)
    }
}
