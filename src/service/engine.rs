//! The farming state engine.
//!
//! `FarmEngine::perform_farm` applies one farm action to every piece of state
//! it touches: the server's farm, the actor's profile, goal payouts to the
//! day's contributors and the live daily aggregate. Store writes happen in one
//! transaction and the aggregate is only updated after that transaction
//! commits, so a failed action leaves no trace anywhere.

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::sync::Arc;

use crate::{
    data::profile::ProfileRepository,
    error::{farm::FarmError, AppError},
    model::{farm::FarmConfig, outcome::FarmOutcome},
    service::{farm::FarmService, profile::ProfileService, stats::StatsService},
    util::clock::Clock,
};

#[derive(Clone)]
pub struct FarmEngine {
    db: DatabaseConnection,
    stats: StatsService,
    clock: Arc<dyn Clock>,
}

impl FarmEngine {
    pub fn new(db: DatabaseConnection, stats: StatsService, clock: Arc<dyn Clock>) -> Self {
        Self { db, stats, clock }
    }

    /// Performs one farm action of `amount` by `user_id` in `config`'s server.
    ///
    /// The caller must hold the server's `FarmGuard` so `config.last_actor` is
    /// current for the whole action.
    ///
    /// # Arguments
    /// - `config` - The server's farm as loaded under the guard
    /// - `user_id` - Discord ID of the acting user
    /// - `amount` - Mushrooms farmed, must be positive
    /// - `ignore_last_actor` - Skip the turn check, for administrative farming
    ///
    /// # Returns
    /// - `Ok(FarmOutcome)` - Everything that changed because of the action
    /// - `Err(AppError::FarmErr(InvalidAmount))` - `amount` is not positive
    /// - `Err(AppError::FarmErr(TurnViolation))` - The user farmed last in this server
    /// - `Err(AppError::FarmErr(FarmNotFound))` - The farm was removed from the store
    /// - `Err(AppError::DbErr)` - A store call failed; nothing was changed
    pub async fn perform_farm(
        &self,
        config: &FarmConfig,
        user_id: u64,
        amount: i64,
        ignore_last_actor: bool,
    ) -> Result<FarmOutcome, AppError> {
        if amount <= 0 {
            return Err(FarmError::InvalidAmount(amount).into());
        }
        if !ignore_last_actor && config.last_actor == Some(user_id) {
            return Err(FarmError::TurnViolation {
                server_id: config.server_id,
                user_id,
            }
            .into());
        }

        let _day = self.stats.hold_day().await;
        let mut stats = self.stats.stage(config, user_id, amount).await;

        let txn = self.db.begin().await?;

        FarmService::new(&txn, self.clock.as_ref())
            .apply_farm_delta(config, amount, user_id)
            .await?;

        let mut profile = ProfileService::new(&txn, self.clock.as_ref())
            .get_or_create(user_id)
            .await?;
        let previous_ordinal = profile.rank_ordinal;
        profile.apply_farm_delta(amount);
        let mut profile = profile.recompute_rank();
        let ranked_up = profile.rank_ordinal > previous_ordinal;

        let awarding_daily = stats.should_award();
        if awarding_daily {
            let profiles = ProfileService::new(&txn, self.clock.as_ref());
            for contribution in &stats.contributors {
                if contribution.user_id == user_id {
                    // Saved with the rest of the actor's profile below.
                    profile.award_tokens(contribution.amount);
                } else if !profiles
                    .award_tokens(contribution.user_id, contribution.amount)
                    .await?
                {
                    tracing::warn!(
                        "Contributor {} in server {} has no profile, skipped {} bonus tokens",
                        contribution.user_id,
                        config.server_id,
                        contribution.amount
                    );
                }
            }
            stats.mark_awarded();
        }
        ProfileRepository::new(&txn).save(&profile).await?;

        txn.commit().await?;

        let outcome = FarmOutcome {
            farmed_today: stats.farmed_today,
            daily_goal: stats.daily_goal,
            goal_reached: stats.goal_reached(),
            ranked_up,
            awarding_daily,
            profile,
        };

        if awarding_daily {
            tracing::info!(
                "Server {} reached its daily goal of {:?}, paid {} contributors",
                config.server_id,
                stats.daily_goal,
                stats.contributors.len()
            );
        }
        self.stats.commit(stats, user_id, amount).await;

        tracing::debug!(
            "User {} farmed {} in server {} ({} today)",
            user_id,
            amount,
            config.server_id,
            outcome.farmed_today
        );

        Ok(outcome)
    }
}
