//! Profile factory for creating test profile entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::profile::ProfileFactory;
///
/// let profile = ProfileFactory::new(&db)
///     .user_id("123456789")
///     .lifetime_farmed(120)
///     .rank_ordinal(2)
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    lifetime_farmed: i64,
    tokens: i64,
    lifetime_tokens: i64,
    rank_ordinal: i32,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique ID
    /// - every counter: `0`
    /// - rank_ordinal: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            lifetime_farmed: 0,
            tokens: 0,
            lifetime_tokens: 0,
            rank_ordinal: 0,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn lifetime_farmed(mut self, lifetime_farmed: i64) -> Self {
        self.lifetime_farmed = lifetime_farmed;
        self
    }

    /// Sets both the spendable and lifetime token balances.
    pub fn tokens(mut self, tokens: i64) -> Self {
        self.tokens = tokens;
        self.lifetime_tokens = tokens;
        self
    }

    pub fn rank_ordinal(mut self, rank_ordinal: i32) -> Self {
        self.rank_ordinal = rank_ordinal;
        self
    }

    /// Builds and inserts the profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created profile entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            joined_at: ActiveValue::Set(Utc::now()),
            lifetime_farmed: ActiveValue::Set(self.lifetime_farmed),
            tokens: ActiveValue::Set(self.tokens),
            lifetime_tokens: ActiveValue::Set(self.lifetime_tokens),
            rank_ordinal: ActiveValue::Set(self.rank_ordinal),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values.
pub async fn create_profile(db: &DatabaseConnection) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).build().await
}
