//! Farm data repository for database operations.
//!
//! Provides `FarmRepository` for per-server farm configuration. Rows are only
//! created by explicit setup; every other write is an update that reports
//! whether the server had a farm at all.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    data::is_unique_violation,
    error::{farm::FarmError, AppError},
    model::farm::FarmConfig,
};

/// Repository providing database operations for farm configurations.
pub struct FarmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FarmRepository<'a, C> {
    /// Creates a new FarmRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the farm of a server.
    ///
    /// # Returns
    /// - `Ok(Some(FarmConfig))` - The server has a farm
    /// - `Ok(None)` - The server was never set up
    /// - `Err(AppError)` - Database error or malformed stored ID
    pub async fn find_by_server_id(&self, server_id: u64) -> Result<Option<FarmConfig>, AppError> {
        entity::prelude::Farm::find_by_id(server_id.to_string())
            .one(self.db)
            .await?
            .map(FarmConfig::from_entity)
            .transpose()
    }

    /// Inserts a new farm with zeroed counters and no goal.
    ///
    /// # Returns
    /// - `Ok(FarmConfig)` - The created farm
    /// - `Err(AppError::FarmErr(FarmAlreadyExists))` - The server already has a farm;
    ///   the existing row is untouched
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(
        &self,
        server_id: u64,
        farm_channel: Option<u64>,
        now: DateTime<Utc>,
    ) -> Result<FarmConfig, AppError> {
        let result = entity::farm::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            total_farmed: ActiveValue::Set(0),
            last_actor: ActiveValue::Set(None),
            farm_channel: ActiveValue::Set(farm_channel.map(|id| id.to_string())),
            daily_goal: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => FarmConfig::from_entity(entity),
            Err(err) if is_unique_violation(&err) => {
                Err(FarmError::FarmAlreadyExists(server_id).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Sets the channel where the trigger is accepted.
    ///
    /// # Returns
    /// - `Ok(true)` - Farm updated
    /// - `Ok(false)` - The server has no farm
    pub async fn set_channel(
        &self,
        server_id: u64,
        channel_id: u64,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        use entity::farm::Column;

        let result = entity::prelude::Farm::update_many()
            .filter(Column::ServerId.eq(server_id.to_string()))
            .col_expr(Column::FarmChannel, Expr::value(channel_id.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets or clears the daily goal.
    ///
    /// # Returns
    /// - `Ok(true)` - Farm updated
    /// - `Ok(false)` - The server has no farm
    pub async fn set_daily_goal(
        &self,
        server_id: u64,
        daily_goal: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        use entity::farm::Column;

        let result = entity::prelude::Farm::update_many()
            .filter(Column::ServerId.eq(server_id.to_string()))
            .col_expr(Column::DailyGoal, Expr::value(daily_goal))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds a farm action: bumps the total and records `actor` as last actor.
    ///
    /// # Returns
    /// - `Ok(true)` - Farm updated
    /// - `Ok(false)` - The server has no farm
    pub async fn apply_farm_delta(
        &self,
        server_id: u64,
        amount: i64,
        actor: u64,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        use entity::farm::Column;

        let result = entity::prelude::Farm::update_many()
            .filter(Column::ServerId.eq(server_id.to_string()))
            .col_expr(
                Column::TotalFarmed,
                Expr::col(Column::TotalFarmed).add(amount),
            )
            .col_expr(Column::LastActor, Expr::value(actor.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
