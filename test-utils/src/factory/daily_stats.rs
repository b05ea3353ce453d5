//! Daily stats factory for creating archived daily snapshot entities.
//!
//! The `farms` and `users` columns are raw JSON so tests can seed exactly the
//! shape the repository reads back.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating archived daily snapshots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::daily_stats::DailyStatsFactory;
///
/// let stats = DailyStatsFactory::new(&db, day)
///     .total_farmed(5)
///     .users(serde_json::json!({ "42": 5 }))
///     .build()
///     .await?;
/// ```
pub struct DailyStatsFactory<'a> {
    db: &'a DatabaseConnection,
    day: NaiveDate,
    total_farmed: i64,
    farms: Value,
    users: Value,
}

impl<'a> DailyStatsFactory<'a> {
    /// Creates a new DailyStatsFactory for the given day with no activity.
    pub fn new(db: &'a DatabaseConnection, day: NaiveDate) -> Self {
        Self {
            db,
            day,
            total_farmed: 0,
            farms: json!({}),
            users: json!({}),
        }
    }

    pub fn total_farmed(mut self, total_farmed: i64) -> Self {
        self.total_farmed = total_farmed;
        self
    }

    /// Sets the raw per-server stats object, keyed by server ID string.
    pub fn farms(mut self, farms: Value) -> Self {
        self.farms = farms;
        self
    }

    /// Sets the raw per-user totals object, keyed by user ID string.
    pub fn users(mut self, users: Value) -> Self {
        self.users = users;
        self
    }

    /// Builds and inserts the snapshot entity into the database.
    pub async fn build(self) -> Result<entity::daily_stats::Model, DbErr> {
        entity::daily_stats::ActiveModel {
            day: ActiveValue::Set(self.day),
            total_farmed: ActiveValue::Set(self.total_farmed),
            farms: ActiveValue::Set(self.farms),
            users: ActiveValue::Set(self.users),
            archived_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty archived snapshot for `day`.
pub async fn create_daily_stats(
    db: &DatabaseConnection,
    day: NaiveDate,
) -> Result<entity::daily_stats::Model, DbErr> {
    DailyStatsFactory::new(db, day).build().await
}
