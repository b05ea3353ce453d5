use sea_orm::ConnectionTrait;

use crate::{
    data::farm::FarmRepository,
    error::{farm::FarmError, AppError},
    model::farm::FarmConfig,
    util::clock::Clock,
};

pub struct FarmService<'a, C: ConnectionTrait> {
    db: &'a C,
    clock: &'a dyn Clock,
}

impl<'a, C: ConnectionTrait> FarmService<'a, C> {
    pub fn new(db: &'a C, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Gets the farm of a server, `None` if it was never set up
    pub async fn get_farm(&self, server_id: u64) -> Result<Option<FarmConfig>, AppError> {
        FarmRepository::new(self.db)
            .find_by_server_id(server_id)
            .await
    }

    /// Sets up a farm for a server
    ///
    /// Fails with `FarmAlreadyExists` if the server already has one, leaving
    /// the existing farm untouched.
    pub async fn setup_farm(
        &self,
        server_id: u64,
        farm_channel: Option<u64>,
    ) -> Result<FarmConfig, AppError> {
        let repo = FarmRepository::new(self.db);

        if repo.find_by_server_id(server_id).await?.is_some() {
            return Err(FarmError::FarmAlreadyExists(server_id).into());
        }

        let farm = repo.create(server_id, farm_channel, self.clock.now()).await?;
        tracing::info!("Set up farm for server {}", server_id);

        Ok(farm)
    }

    /// Sets the channel where the trigger is accepted
    pub async fn set_channel(&self, server_id: u64, channel_id: u64) -> Result<(), AppError> {
        let updated = FarmRepository::new(self.db)
            .set_channel(server_id, channel_id, self.clock.now())
            .await?;

        if !updated {
            return Err(FarmError::FarmNotFound(server_id).into());
        }

        Ok(())
    }

    /// Sets or clears the daily goal
    ///
    /// The change applies from the next daily period; a server that already
    /// farmed today keeps the goal it started the day with.
    pub async fn set_daily_goal(
        &self,
        server_id: u64,
        daily_goal: Option<i64>,
    ) -> Result<(), AppError> {
        if let Some(goal) = daily_goal.filter(|goal| *goal <= 0) {
            return Err(FarmError::InvalidGoal(goal).into());
        }

        let updated = FarmRepository::new(self.db)
            .set_daily_goal(server_id, daily_goal, self.clock.now())
            .await?;

        if !updated {
            return Err(FarmError::FarmNotFound(server_id).into());
        }

        Ok(())
    }

    /// Records a farm action by `actor` against the server's lifetime counters
    ///
    /// Returns the updated configuration.
    pub async fn apply_farm_delta(
        &self,
        config: &FarmConfig,
        amount: i64,
        actor: u64,
    ) -> Result<FarmConfig, AppError> {
        let now = self.clock.now();

        let updated = FarmRepository::new(self.db)
            .apply_farm_delta(config.server_id, amount, actor, now)
            .await?;

        if !updated {
            return Err(FarmError::FarmNotFound(config.server_id).into());
        }

        let mut config = config.clone();
        config.apply_farm_delta(amount, actor, now);

        Ok(config)
    }
}
