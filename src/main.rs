mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, error::AppError, scheduler::daily_reset, state::AppState,
    util::clock::SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shroomfarm=info,serenity=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, Arc::new(SystemClock)).await?;

    daily_reset::start_scheduler(state.stats.clone()).await?;

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
