use crate::{
    data::daily_stats::DailyStatsRepository,
    error::AppError,
    model::{daily::DailyAggregate, farm::FarmConfig},
};
use chrono::{NaiveDate, Utc};
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{create_daily_stats, daily_stats::DailyStatsFactory},
};

mod delete_all;
mod find_latest;
mod totals_excluding;
mod upsert;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn farm(server_id: u64, daily_goal: Option<i64>) -> FarmConfig {
    FarmConfig {
        server_id,
        total_farmed: 0,
        last_actor: None,
        farm_channel: Some(1),
        daily_goal,
        updated_at: Utc::now(),
    }
}
