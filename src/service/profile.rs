use sea_orm::ConnectionTrait;

use crate::{
    data::profile::ProfileRepository,
    error::{farm::FarmError, AppError},
    model::profile::Profile,
    util::clock::Clock,
};

pub struct ProfileService<'a, C: ConnectionTrait> {
    db: &'a C,
    clock: &'a dyn Clock,
}

impl<'a, C: ConnectionTrait> ProfileService<'a, C> {
    pub fn new(db: &'a C, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Gets a user's profile, `None` if they never farmed
    pub async fn get(&self, user_id: u64) -> Result<Option<Profile>, AppError> {
        ProfileRepository::new(self.db).find_by_user_id(user_id).await
    }

    /// Creates an empty profile, failing with `ProfileAlreadyExists` if one exists
    pub async fn create(&self, user_id: u64) -> Result<Profile, AppError> {
        ProfileRepository::new(self.db)
            .create(user_id, self.clock.now())
            .await
    }

    /// Gets the user's profile, creating it on first use
    ///
    /// A profile created concurrently between the lookup and the insert is read
    /// back instead of failing.
    pub async fn get_or_create(&self, user_id: u64) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        if let Some(profile) = repo.find_by_user_id(user_id).await? {
            return Ok(profile);
        }

        match repo.create(user_id, self.clock.now()).await {
            Err(AppError::FarmErr(FarmError::ProfileAlreadyExists(_))) => repo
                .find_by_user_id(user_id)
                .await?
                .ok_or_else(|| FarmError::ProfileAlreadyExists(user_id).into()),
            result => result,
        }
    }

    /// Adds a farm action to the user's lifetime counters, creating the profile if absent
    ///
    /// Does not touch the rank; see `Profile::recompute_rank`.
    pub async fn apply_farm_delta(&self, user_id: u64, amount: i64) -> Result<Profile, AppError> {
        let mut profile = self.get_or_create(user_id).await?;

        ProfileRepository::new(self.db)
            .increment_farmed(user_id, amount)
            .await?;
        profile.apply_farm_delta(amount);

        Ok(profile)
    }

    /// Adds bonus tokens, returning false if the user has no profile
    pub async fn award_tokens(&self, user_id: u64, amount: i64) -> Result<bool, AppError> {
        Ok(ProfileRepository::new(self.db)
            .increment_tokens(user_id, amount)
            .await?)
    }

    /// Overwrites the spendable balance, returning false if the user has no profile
    pub async fn set_tokens(&self, user_id: u64, tokens: i64) -> Result<bool, AppError> {
        Ok(ProfileRepository::new(self.db)
            .set_tokens(user_id, tokens)
            .await?)
    }

    /// Overwrites the stored rank ordinal without checking eligibility
    ///
    /// The next farm action recomputes the rank from `lifetime_farmed`.
    pub async fn set_rank(&self, user_id: u64, rank_ordinal: usize) -> Result<bool, AppError> {
        let rank_ordinal = i32::try_from(rank_ordinal).unwrap_or(i32::MAX);

        Ok(ProfileRepository::new(self.db)
            .set_rank(user_id, rank_ordinal)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::clock::SystemClock;
    use test_utils::{builder::TestBuilder, factory::profile::ProfileFactory};

    #[tokio::test]
    async fn creates_profile_on_first_farm() -> Result<(), AppError> {
        let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = ProfileService::new(db, &SystemClock);

        let profile = service.apply_farm_delta(5, 3).await?;

        assert_eq!(profile.lifetime_farmed, 3);
        let stored = service.get(5).await?.unwrap();
        assert_eq!(stored.lifetime_farmed, 3);
        assert_eq!(stored.tokens, 3);

        Ok(())
    }

    #[tokio::test]
    async fn get_or_create_returns_existing_profile() -> Result<(), AppError> {
        let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        ProfileFactory::new(db)
            .user_id("5")
            .lifetime_farmed(40)
            .build()
            .await?;
        let service = ProfileService::new(db, &SystemClock);

        let profile = service.get_or_create(5).await?;

        assert_eq!(profile.lifetime_farmed, 40);

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_duplicate() -> Result<(), AppError> {
        let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = ProfileService::new(db, &SystemClock);

        service.create(5).await?;
        let result = service.create(5).await;

        assert!(matches!(
            result,
            Err(AppError::FarmErr(FarmError::ProfileAlreadyExists(5)))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn overrides_report_missing_profile() -> Result<(), AppError> {
        let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = ProfileService::new(db, &SystemClock);

        assert!(!service.set_tokens(9, 100).await?);
        assert!(!service.set_rank(9, 3).await?);
        assert!(!service.award_tokens(9, 1).await?);
        assert!(service.get(9).await?.is_none());

        Ok(())
    }
}
