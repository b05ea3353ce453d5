//! Farm factory for creating test farm configuration entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test farm configurations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::farm::FarmFactory;
///
/// let farm = FarmFactory::new(&db)
///     .server_id("987654321")
///     .farm_channel(Some("555".to_string()))
///     .daily_goal(Some(100))
///     .build()
///     .await?;
/// ```
pub struct FarmFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    total_farmed: i64,
    last_actor: Option<String>,
    farm_channel: Option<String>,
    daily_goal: Option<i64>,
}

impl<'a> FarmFactory<'a> {
    /// Creates a new FarmFactory with default values.
    ///
    /// Defaults:
    /// - server_id: auto-incremented unique ID
    /// - total_farmed: `0`
    /// - last_actor: `None`
    /// - farm_channel: auto-incremented unique ID
    /// - daily_goal: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            server_id: next_id().to_string(),
            total_farmed: 0,
            last_actor: None,
            farm_channel: Some(next_id().to_string()),
            daily_goal: None,
        }
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn total_farmed(mut self, total_farmed: i64) -> Self {
        self.total_farmed = total_farmed;
        self
    }

    pub fn last_actor(mut self, last_actor: Option<String>) -> Self {
        self.last_actor = last_actor;
        self
    }

    pub fn farm_channel(mut self, farm_channel: Option<String>) -> Self {
        self.farm_channel = farm_channel;
        self
    }

    pub fn daily_goal(mut self, daily_goal: Option<i64>) -> Self {
        self.daily_goal = daily_goal;
        self
    }

    /// Builds and inserts the farm entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created farm entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::farm::Model, DbErr> {
        entity::farm::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            total_farmed: ActiveValue::Set(self.total_farmed),
            last_actor: ActiveValue::Set(self.last_actor),
            farm_channel: ActiveValue::Set(self.farm_channel),
            daily_goal: ActiveValue::Set(self.daily_goal),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a farm with default values.
pub async fn create_farm(db: &DatabaseConnection) -> Result<entity::farm::Model, DbErr> {
    FarmFactory::new(db).build().await
}
