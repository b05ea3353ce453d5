use super::*;

/// Tests finding an existing profile.
///
/// Expected: Ok(Some) with the stored counters converted to domain types
#[tokio::test]
async fn finds_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    ProfileFactory::new(db)
        .user_id("1198456791234567890")
        .lifetime_farmed(120)
        .tokens(7)
        .rank_ordinal(2)
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let profile = repo.find_by_user_id(1198456791234567890).await?.unwrap();

    assert_eq!(profile.user_id, 1198456791234567890);
    assert_eq!(profile.lifetime_farmed, 120);
    assert_eq!(profile.tokens, 7);
    assert_eq!(profile.lifetime_tokens, 7);
    assert_eq!(profile.rank_ordinal, 2);

    Ok(())
}

/// Tests finding a user who never farmed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let profile = repo.find_by_user_id(404).await?;

    assert!(profile.is_none());

    Ok(())
}
