//! Today's in-memory rollup of farming activity.
//!
//! `DailyAggregate` is the live, process-wide record of the current day. Each
//! server gets a `DailyFarmStats` entry the first time it farms that day, which
//! snapshots the server's daily goal and tracks contributor credit for the goal
//! payout. At rollover the aggregate is archived as one `daily_stats` row.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::prelude::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    error::{internal::InternalError, AppError},
    model::farm::FarmConfig,
};

/// Credited amount of one user towards a server's daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub user_id: u64,
    pub amount: i64,
}

/// One server's activity for the day.
///
/// Contributors are kept in first-contribution order, which is the tie-break
/// for leaderboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFarmStats {
    pub server_id: u64,
    #[serde(default)]
    pub farmed_today: i64,
    /// Goal captured when the entry was created; later goal changes do not apply
    #[serde(default)]
    pub daily_goal: Option<i64>,
    /// Contributors have been paid for reaching the goal today
    #[serde(default)]
    pub awarded: bool,
    /// Credit only for amounts farmed before the goal was reached
    #[serde(default)]
    pub contributors: Vec<Contribution>,
}

impl DailyFarmStats {
    pub fn new(server_id: u64, daily_goal: Option<i64>) -> Self {
        Self {
            server_id,
            farmed_today: 0,
            daily_goal,
            awarded: false,
            contributors: Vec::new(),
        }
    }

    /// `farmed_today` has met the goal. Always `false` without a goal.
    pub fn goal_reached(&self) -> bool {
        self.daily_goal
            .is_some_and(|goal| self.farmed_today >= goal)
    }

    /// Goal reached today and contributors not yet paid.
    pub fn should_award(&self) -> bool {
        self.goal_reached() && !self.awarded
    }

    /// Credited amount for `user_id`, 0 if they have not contributed.
    #[cfg(test)]
    pub fn contribution(&self, user_id: u64) -> i64 {
        self.contributors
            .iter()
            .find(|c| c.user_id == user_id)
            .map_or(0, |c| c.amount)
    }

    /// Applies one farm action to the server's stats.
    ///
    /// While a goal is set and not yet reached, the user is credited with
    /// `min(goal - farmed_today, amount)` so a single large action cannot earn
    /// credit past the goal. `farmed_today` always grows by the full amount.
    pub fn record(&mut self, user_id: u64, amount: i64) {
        if let Some(goal) = self.daily_goal {
            if !self.goal_reached() {
                let credited = (goal - self.farmed_today).min(amount);
                credit(&mut self.contributors, user_id, credited);
            }
        }
        self.farmed_today += amount;
    }

    /// Marks the goal payout as done, returning whether the flag flipped.
    pub fn mark_awarded(&mut self) -> bool {
        !std::mem::replace(&mut self.awarded, true)
    }

    /// Contributors sorted by credited amount, highest first.
    pub fn top_contributors(&self) -> Vec<Contribution> {
        sorted_desc(self.contributors.clone())
    }
}

/// Process-wide activity for one UTC day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAggregate {
    pub day: NaiveDate,
    pub total_farmed: i64,
    farms: BTreeMap<u64, DailyFarmStats>,
    users: BTreeMap<u64, i64>,
}

impl DailyAggregate {
    /// Empty aggregate for `day`.
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day,
            total_farmed: 0,
            farms: BTreeMap::new(),
            users: BTreeMap::new(),
        }
    }

    /// Restores an archived snapshot as a live aggregate.
    ///
    /// # Returns
    /// - `Ok(DailyAggregate)` - The restored aggregate
    /// - `Err(AppError::InternalErr(DailyStatsJson))` - JSON columns do not match
    pub fn from_entity(entity: entity::daily_stats::Model) -> Result<Self, AppError> {
        Ok(Self {
            day: entity.day,
            total_farmed: entity.total_farmed,
            farms: farms_from_json(entity.day, entity.farms)?,
            users: users_from_json(entity.day, entity.users)?,
        })
    }

    /// Converts the aggregate into an archivable entity, stamped `archived_at`.
    pub fn to_active_model(
        &self,
        archived_at: DateTime<Utc>,
    ) -> Result<entity::daily_stats::ActiveModel, AppError> {
        use sea_orm::ActiveValue;

        let to_json = |value: Result<Json, serde_json::Error>| {
            value.map_err(|source| InternalError::DailyStatsJson {
                day: self.day,
                source,
            })
        };

        Ok(entity::daily_stats::ActiveModel {
            day: ActiveValue::Set(self.day),
            total_farmed: ActiveValue::Set(self.total_farmed),
            farms: ActiveValue::Set(to_json(serde_json::to_value(&self.farms))?),
            users: ActiveValue::Set(to_json(serde_json::to_value(&self.users))?),
            archived_at: ActiveValue::Set(archived_at),
            ..Default::default()
        })
    }

    pub fn farm_stats(&self, server_id: u64) -> Option<&DailyFarmStats> {
        self.farms.get(&server_id)
    }

    /// Today's total for a user, 0 if they have not farmed.
    pub fn user_total(&self, user_id: u64) -> i64 {
        self.users.get(&user_id).copied().unwrap_or(0)
    }

    /// Today's total for a server, 0 if it has not farmed.
    pub fn server_total(&self, server_id: u64) -> i64 {
        self.farm_stats(server_id).map_or(0, |s| s.farmed_today)
    }

    /// Computes the server's stats after an action without touching the aggregate.
    ///
    /// A server farming for the first time today starts from its configured
    /// goal; otherwise the goal captured earlier in the day is kept.
    pub fn stage_action(&self, config: &FarmConfig, user_id: u64, amount: i64) -> DailyFarmStats {
        let mut stats = self
            .farm_stats(config.server_id)
            .cloned()
            .unwrap_or_else(|| DailyFarmStats::new(config.server_id, config.daily_goal));
        stats.record(user_id, amount);
        stats
    }

    /// Applies a staged action: bumps the day and user totals and stores `stats`.
    pub fn commit_action(&mut self, stats: DailyFarmStats, user_id: u64, amount: i64) {
        self.total_farmed += amount;
        *self.users.entry(user_id).or_insert(0) += amount;
        self.farms.insert(stats.server_id, stats);
    }

    /// Records one farm action and returns the server's updated stats.
    pub fn record_action(&mut self, config: &FarmConfig, user_id: u64, amount: i64) -> DailyFarmStats {
        let stats = self.stage_action(config, user_id, amount);
        self.commit_action(stats.clone(), user_id, amount);
        stats
    }

    /// Marks the server's goal payout as done.
    ///
    /// # Returns
    /// - `true` - The flag flipped on this call
    /// - `false` - Already awarded, or the server has no stats today
    pub fn mark_awarded(&mut self, server_id: u64) -> bool {
        self.farms
            .get_mut(&server_id)
            .is_some_and(DailyFarmStats::mark_awarded)
    }
}

/// Parses an archived `farms` column.
pub fn farms_from_json(
    day: NaiveDate,
    value: Json,
) -> Result<BTreeMap<u64, DailyFarmStats>, AppError> {
    Ok(serde_json::from_value(value)
        .map_err(|source| InternalError::DailyStatsJson { day, source })?)
}

/// Parses an archived `users` column.
pub fn users_from_json(day: NaiveDate, value: Json) -> Result<BTreeMap<u64, i64>, AppError> {
    Ok(serde_json::from_value(value)
        .map_err(|source| InternalError::DailyStatsJson { day, source })?)
}

/// Adds `amount` to `user_id`'s entry, appending a new entry on first credit.
pub fn credit(contributors: &mut Vec<Contribution>, user_id: u64, amount: i64) {
    match contributors.iter_mut().find(|c| c.user_id == user_id) {
        Some(entry) => entry.amount += amount,
        None => contributors.push(Contribution { user_id, amount }),
    }
}

/// Stable sort by amount, highest first; ties keep their existing order.
pub fn sorted_desc(mut contributions: Vec<Contribution>) -> Vec<Contribution> {
    contributions.sort_by(|a, b| b.amount.cmp(&a.amount));
    contributions
}
