//! Owner of the live daily aggregate.
//!
//! `StatsService` holds today's `DailyAggregate` for the whole process and the
//! rollover gate that keeps farm actions and the midnight rollover apart:
//! every farm action holds the read side for its full duration, rollover takes
//! the write side. Weekly figures combine the live aggregate with the days of
//! the week archived so far.

use chrono::{Datelike, Weekday};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::{
    data::daily_stats::DailyStatsRepository,
    error::AppError,
    model::{
        daily::{credit, sorted_desc, Contribution, DailyAggregate, DailyFarmStats},
        farm::FarmConfig,
    },
    util::clock::Clock,
};

#[derive(Clone)]
pub struct StatsService {
    db: DatabaseConnection,
    clock: Arc<dyn Clock>,
    today: Arc<RwLock<DailyAggregate>>,
    rollover: Arc<RwLock<()>>,
}

impl StatsService {
    /// Restores the live aggregate at startup.
    ///
    /// The latest archived snapshot is reused only when it belongs to today,
    /// which happens after a restart following a checkpoint. Otherwise the day
    /// starts empty.
    pub async fn load(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let aggregate = match DailyStatsRepository::new(&db).find_latest().await? {
            Some(latest) if clock.is_today(latest.day) => {
                tracing::info!(
                    "Restored {} farmed today from the archived snapshot",
                    latest.total_farmed
                );
                latest
            }
            _ => DailyAggregate::new(clock.today()),
        };

        Ok(Self {
            db,
            clock,
            today: Arc::new(RwLock::new(aggregate)),
            rollover: Arc::new(RwLock::new(())),
        })
    }

    /// Holds off rollover until the returned guard is dropped.
    pub async fn hold_day(&self) -> RwLockReadGuard<'_, ()> {
        self.rollover.read().await
    }

    /// Closes the current day and starts a new one for today.
    ///
    /// A day ending on Sunday closes the week: every archived snapshot is
    /// deleted and the day itself is discarded. Any other day is archived,
    /// replacing an earlier checkpoint of the same day. The new aggregate is
    /// swapped in even if persisting fails so today's actions are never
    /// booked on the closed day; the persistence error is still returned.
    pub async fn rollover(&self) -> Result<(), AppError> {
        let _exclusive = self.rollover.write().await;
        let mut today = self.today.write().await;

        let repo = DailyStatsRepository::new(&self.db);
        let persisted = if today.day.weekday() == Weekday::Sun {
            repo.delete_all().await.map_err(AppError::from).map(|deleted| {
                tracing::info!("Weekly reset: cleared {} archived days", deleted);
            })
        } else {
            repo.upsert(&today, self.clock.now()).await.map(|_| {
                tracing::info!(
                    "Archived {} with {} farmed",
                    today.day,
                    today.total_farmed
                );
            })
        };

        *today = DailyAggregate::new(self.clock.today());

        persisted
    }

    /// Saves the live aggregate under its day without rotating it.
    pub async fn checkpoint(&self) -> Result<(), AppError> {
        let _day = self.hold_day().await;
        let today = self.today.read().await;

        DailyStatsRepository::new(&self.db)
            .upsert(&today, self.clock.now())
            .await
    }

    /// Snapshot of the live aggregate.
    pub async fn today(&self) -> DailyAggregate {
        self.today.read().await.clone()
    }

    /// Stats a farm action would produce, computed without applying it.
    pub(crate) async fn stage(
        &self,
        config: &FarmConfig,
        user_id: u64,
        amount: i64,
    ) -> DailyFarmStats {
        self.today.read().await.stage_action(config, user_id, amount)
    }

    /// Applies a staged farm action to the live aggregate.
    pub(crate) async fn commit(&self, stats: DailyFarmStats, user_id: u64, amount: i64) {
        self.today.write().await.commit_action(stats, user_id, amount);
    }

    pub async fn user_today(&self, user_id: u64) -> i64 {
        self.today.read().await.user_total(user_id)
    }

    pub async fn server_today(&self, server_id: u64) -> i64 {
        self.today.read().await.server_total(server_id)
    }

    pub async fn total_today(&self) -> i64 {
        self.today.read().await.total_farmed
    }

    /// User's total for the week: archived days plus today.
    pub async fn user_weekly(&self, user_id: u64) -> Result<i64, AppError> {
        let _day = self.hold_day().await;
        let today = self.today.read().await;

        let archived: i64 = DailyStatsRepository::new(&self.db)
            .users_excluding(today.day)
            .await?
            .iter()
            .filter_map(|users| users.get(&user_id))
            .sum();

        Ok(archived + today.user_total(user_id))
    }

    /// Server's total for the week: archived days plus today.
    pub async fn server_weekly(&self, server_id: u64) -> Result<i64, AppError> {
        let _day = self.hold_day().await;
        let today = self.today.read().await;

        let archived: i64 = DailyStatsRepository::new(&self.db)
            .farms_excluding(today.day)
            .await?
            .iter()
            .filter_map(|farms| farms.get(&server_id))
            .map(|stats| stats.farmed_today)
            .sum();

        Ok(archived + today.server_total(server_id))
    }

    /// Process-wide total for the week: archived days plus today.
    pub async fn total_weekly(&self) -> Result<i64, AppError> {
        let _day = self.hold_day().await;
        let today = self.today.read().await;

        let archived = DailyStatsRepository::new(&self.db)
            .total_farmed_excluding(today.day)
            .await?;

        Ok(archived + today.total_farmed)
    }

    /// Today's goal contributors of a server, highest credit first.
    pub async fn top_daily_contributors(&self, server_id: u64) -> Vec<Contribution> {
        self.today
            .read()
            .await
            .farm_stats(server_id)
            .map(DailyFarmStats::top_contributors)
            .unwrap_or_default()
    }

    /// The week's goal contributors of a server, highest credit first.
    ///
    /// Ties are ordered by who contributed first during the week.
    pub async fn top_weekly_contributors(
        &self,
        server_id: u64,
    ) -> Result<Vec<Contribution>, AppError> {
        let _day = self.hold_day().await;
        let today = self.today.read().await;

        let archived = DailyStatsRepository::new(&self.db)
            .farms_excluding(today.day)
            .await?;

        let mut merged = Vec::new();
        let days = archived
            .iter()
            .filter_map(|farms| farms.get(&server_id))
            .chain(today.farm_stats(server_id));
        for stats in days {
            for contribution in &stats.contributors {
                credit(&mut merged, contribution.user_id, contribution.amount);
            }
        }

        Ok(sorted_desc(merged))
    }
}
