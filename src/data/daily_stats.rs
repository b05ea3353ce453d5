//! Archived daily snapshot repository.
//!
//! One row per UTC day holds the rolled-over `DailyAggregate`. The rows of the
//! current week feed the weekly totals and are cleared at the Sunday rollover.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    prelude::Json, sea_query::OnConflict, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::BTreeMap;

use crate::{
    error::AppError,
    model::daily::{farms_from_json, users_from_json, DailyAggregate, DailyFarmStats},
};

/// Repository providing database operations for archived daily snapshots.
pub struct DailyStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DailyStatsRepository<'a, C> {
    /// Creates a new DailyStatsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Archives `aggregate` under its day, replacing any existing snapshot.
    ///
    /// # Arguments
    /// - `aggregate` - The aggregate to persist
    /// - `archived_at` - Timestamp stored with the snapshot
    ///
    /// # Returns
    /// - `Ok(())` - Snapshot inserted or replaced
    /// - `Err(AppError)` - Serialization or database error
    pub async fn upsert(
        &self,
        aggregate: &DailyAggregate,
        archived_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        use entity::daily_stats::Column;

        entity::prelude::DailyStats::insert(aggregate.to_active_model(archived_at)?)
            .on_conflict(
                OnConflict::column(Column::Day)
                    .update_columns([
                        Column::TotalFarmed,
                        Column::Farms,
                        Column::Users,
                        Column::ArchivedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds the snapshot with the most recent day.
    ///
    /// # Returns
    /// - `Ok(Some(DailyAggregate))` - Latest snapshot restored
    /// - `Ok(None)` - Nothing archived
    /// - `Err(AppError)` - Database error or malformed JSON
    pub async fn find_latest(&self) -> Result<Option<DailyAggregate>, AppError> {
        entity::prelude::DailyStats::find()
            .order_by_desc(entity::daily_stats::Column::Day)
            .one(self.db)
            .await?
            .map(DailyAggregate::from_entity)
            .transpose()
    }

    /// Finds the snapshot of a given day.
    #[cfg(test)]
    pub async fn find_by_day(&self, day: NaiveDate) -> Result<Option<DailyAggregate>, AppError> {
        entity::prelude::DailyStats::find()
            .filter(entity::daily_stats::Column::Day.eq(day))
            .one(self.db)
            .await?
            .map(DailyAggregate::from_entity)
            .transpose()
    }

    /// Deletes every archived snapshot.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of snapshots deleted
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::DailyStats::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sum of `total_farmed` over all snapshots except `exclude_day`.
    pub async fn total_farmed_excluding(&self, exclude_day: NaiveDate) -> Result<i64, DbErr> {
        use entity::daily_stats::Column;

        let totals: Vec<i64> = entity::prelude::DailyStats::find()
            .select_only()
            .column(Column::TotalFarmed)
            .filter(Column::Day.ne(exclude_day))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(totals.into_iter().sum())
    }

    /// Per-user totals of every snapshot except `exclude_day`.
    pub async fn users_excluding(
        &self,
        exclude_day: NaiveDate,
    ) -> Result<Vec<BTreeMap<u64, i64>>, AppError> {
        use entity::daily_stats::Column;

        let rows: Vec<(NaiveDate, Json)> = entity::prelude::DailyStats::find()
            .select_only()
            .column(Column::Day)
            .column(Column::Users)
            .filter(Column::Day.ne(exclude_day))
            .order_by_asc(Column::Day)
            .into_tuple()
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(day, users)| users_from_json(day, users))
            .collect()
    }

    /// Per-server stats of every snapshot except `exclude_day`, oldest first.
    pub async fn farms_excluding(
        &self,
        exclude_day: NaiveDate,
    ) -> Result<Vec<BTreeMap<u64, DailyFarmStats>>, AppError> {
        use entity::daily_stats::Column;

        let rows: Vec<(NaiveDate, Json)> = entity::prelude::DailyStats::find()
            .select_only()
            .column(Column::Day)
            .column(Column::Farms)
            .filter(Column::Day.ne(exclude_day))
            .order_by_asc(Column::Day)
            .into_tuple()
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(day, farms)| farms_from_json(day, farms))
            .collect()
    }
}
