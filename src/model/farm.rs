//! Farm configuration domain model.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Per-server farm configuration and lifetime counters.
///
/// `last_actor` enforces turn order: the same user may not farm twice in a row
/// in one server.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmConfig {
    /// Discord guild ID of the server
    pub server_id: u64,
    pub total_farmed: i64,
    /// User who performed the most recent farm action
    pub last_actor: Option<u64>,
    /// Channel where the 🍄 trigger is accepted
    pub farm_channel: Option<u64>,
    /// Daily target; applies from the next daily period when changed
    pub daily_goal: Option<i64>,
    pub updated_at: DateTime<Utc>,
}

impl FarmConfig {
    /// Converts an entity model to a farm domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(FarmConfig)` - The converted farm configuration
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a u64
    pub fn from_entity(entity: entity::farm::Model) -> Result<Self, AppError> {
        Ok(Self {
            server_id: parse_u64_from_string(entity.server_id)?,
            total_farmed: entity.total_farmed,
            last_actor: parse_optional_u64(entity.last_actor)?,
            farm_channel: parse_optional_u64(entity.farm_channel)?,
            daily_goal: entity.daily_goal,
            updated_at: entity.updated_at,
        })
    }

    /// Records a farm action by `actor` against the lifetime counters.
    pub fn apply_farm_delta(&mut self, amount: i64, actor: u64, now: DateTime<Utc>) {
        self.total_farmed += amount;
        self.last_actor = Some(actor);
        self.updated_at = now;
    }

    /// Whether the farm accepts the trigger at all.
    pub fn is_ready(&self) -> bool {
        self.farm_channel.is_some()
    }
}
