//! User profile domain model.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    model::rank::{self, Rank},
    util::parse::parse_u64_from_string,
};

/// Lifetime farming state of a user.
///
/// Created on a user's first farming action and never deleted. `tokens` is the
/// spendable balance; `lifetime_tokens` only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Discord ID of the user
    pub user_id: u64,
    /// When the user first farmed
    pub joined_at: DateTime<Utc>,
    pub lifetime_farmed: i64,
    pub tokens: i64,
    pub lifetime_tokens: i64,
    /// Ordinal into `rank::RANKS`. May be out of date or out of range after an
    /// administrative override until the next `recompute_rank`.
    pub rank_ordinal: usize,
}

impl Profile {
    /// Creates an empty profile at the lowest rank.
    pub fn new(user_id: u64, joined_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            joined_at,
            lifetime_farmed: 0,
            tokens: 0,
            lifetime_tokens: 0,
            rank_ordinal: 0,
        }
    }

    /// Converts an entity model to a profile domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The converted profile
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not a u64
    pub fn from_entity(entity: entity::profile::Model) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;

        Ok(Self {
            user_id,
            joined_at: entity.joined_at,
            lifetime_farmed: entity.lifetime_farmed,
            tokens: entity.tokens,
            lifetime_tokens: entity.lifetime_tokens,
            // Negative ordinals can only come from manual edits; treat as the lowest rank.
            rank_ordinal: usize::try_from(entity.rank_ordinal).unwrap_or(0),
        })
    }

    /// The rank the profile currently holds.
    ///
    /// Falls back to the rank earned by `lifetime_farmed` when the stored
    /// ordinal is outside the ladder.
    pub fn rank(&self) -> &'static Rank {
        rank::rank(self.rank_ordinal).unwrap_or_else(|| rank::rank_for(self.lifetime_farmed))
    }

    /// The rank after the current one, `None` at the top of the ladder.
    pub fn next_rank(&self) -> Option<&'static Rank> {
        rank::next_rank(self.rank_ordinal)
    }

    /// Adds a farm action: one farmed mushroom earns one token.
    pub fn apply_farm_delta(&mut self, amount: i64) {
        self.lifetime_farmed += amount;
        self.award_tokens(amount);
    }

    /// Adds tokens without counting them as farmed.
    pub fn award_tokens(&mut self, amount: i64) {
        self.tokens += amount;
        self.lifetime_tokens += amount;
    }

    /// Moves the profile to the rank earned by `lifetime_farmed`.
    ///
    /// Recomputed from the static table rather than stepped, so a rank set out
    /// of band is corrected in either direction.
    pub fn recompute_rank(mut self) -> Self {
        self.rank_ordinal = rank::rank_for(self.lifetime_farmed).ordinal;
        self
    }
}
