use super::*;

/// Tests creating a profile for a new user.
///
/// Expected: Ok with every counter at zero and the lowest rank
#[tokio::test]
async fn creates_empty_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let profile = repo.create(42, Utc::now()).await?;

    assert_eq!(profile.user_id, 42);
    assert_eq!(profile.lifetime_farmed, 0);
    assert_eq!(profile.tokens, 0);
    assert_eq!(profile.rank_ordinal, 0);

    let stored = repo.find_by_user_id(42).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a profile that already exists.
///
/// Expected: Err(ProfileAlreadyExists) and the existing row untouched
#[tokio::test]
async fn rejects_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    ProfileFactory::new(db)
        .user_id("42")
        .lifetime_farmed(10)
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let result = repo.create(42, Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::FarmErr(FarmError::ProfileAlreadyExists(42)))
    ));
    let stored = repo.find_by_user_id(42).await?.unwrap();
    assert_eq!(stored.lifetime_farmed, 10);

    Ok(())
}
