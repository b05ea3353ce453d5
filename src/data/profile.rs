//! Profile data repository for database operations.
//!
//! Provides `ProfileRepository` for user profiles: lookups, creation on first
//! farm, full saves of an updated profile, and the field increments and
//! overrides used by goal payouts and admin commands.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::{
    data::is_unique_violation,
    error::{farm::FarmError, AppError},
    model::profile::Profile,
};

/// Repository providing database operations for user profiles.
pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new ProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a profile by the user's Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Profile found
    /// - `Ok(None)` - The user has never farmed
    /// - `Err(AppError)` - Database error or malformed stored ID
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<Profile>, AppError> {
        entity::prelude::Profile::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
            .map(Profile::from_entity)
            .transpose()
    }

    /// Inserts an empty profile for the user.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created profile at the lowest rank
    /// - `Err(AppError::FarmErr(ProfileAlreadyExists))` - A profile already exists
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, user_id: u64, joined_at: DateTime<Utc>) -> Result<Profile, AppError> {
        let profile = Profile::new(user_id, joined_at);

        let result = entity::profile::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            joined_at: ActiveValue::Set(joined_at),
            lifetime_farmed: ActiveValue::Set(0),
            tokens: ActiveValue::Set(0),
            lifetime_tokens: ActiveValue::Set(0),
            rank_ordinal: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(_) => Ok(profile),
            Err(err) if is_unique_violation(&err) => {
                Err(FarmError::ProfileAlreadyExists(user_id).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Writes every mutable field of `profile` back to its row.
    ///
    /// # Returns
    /// - `Ok(())` - Row replaced
    /// - `Err(DbErr::RecordNotUpdated)` - The profile does not exist
    pub async fn save(&self, profile: &Profile) -> Result<(), DbErr> {
        entity::profile::ActiveModel {
            user_id: ActiveValue::Unchanged(profile.user_id.to_string()),
            joined_at: ActiveValue::Set(profile.joined_at),
            lifetime_farmed: ActiveValue::Set(profile.lifetime_farmed),
            tokens: ActiveValue::Set(profile.tokens),
            lifetime_tokens: ActiveValue::Set(profile.lifetime_tokens),
            rank_ordinal: ActiveValue::Set(profile.rank_ordinal as i32),
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Adds a farm action to the stored counters without reading the row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No profile for the user
    pub async fn increment_farmed(&self, user_id: u64, amount: i64) -> Result<bool, DbErr> {
        use entity::profile::Column;

        let result = entity::prelude::Profile::update_many()
            .filter(Column::UserId.eq(user_id.to_string()))
            .col_expr(
                Column::LifetimeFarmed,
                Expr::col(Column::LifetimeFarmed).add(amount),
            )
            .col_expr(Column::Tokens, Expr::col(Column::Tokens).add(amount))
            .col_expr(
                Column::LifetimeTokens,
                Expr::col(Column::LifetimeTokens).add(amount),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds bonus tokens without counting them as farmed.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No profile for the user
    pub async fn increment_tokens(&self, user_id: u64, amount: i64) -> Result<bool, DbErr> {
        use entity::profile::Column;

        let result = entity::prelude::Profile::update_many()
            .filter(Column::UserId.eq(user_id.to_string()))
            .col_expr(Column::Tokens, Expr::col(Column::Tokens).add(amount))
            .col_expr(
                Column::LifetimeTokens,
                Expr::col(Column::LifetimeTokens).add(amount),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Overwrites the spendable token balance.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No profile for the user
    pub async fn set_tokens(&self, user_id: u64, tokens: i64) -> Result<bool, DbErr> {
        use entity::profile::Column;

        let result = entity::prelude::Profile::update_many()
            .filter(Column::UserId.eq(user_id.to_string()))
            .col_expr(Column::Tokens, Expr::value(tokens))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Overwrites the stored rank ordinal without checking eligibility.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No profile for the user
    pub async fn set_rank(&self, user_id: u64, rank_ordinal: i32) -> Result<bool, DbErr> {
        use entity::profile::Column;

        let result = entity::prelude::Profile::update_many()
            .filter(Column::UserId.eq(user_id.to_string()))
            .col_expr(Column::RankOrdinal, Expr::value(rank_ordinal))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
