use super::*;

/// Tests adding a farm action to stored counters.
///
/// Expected: lifetime_farmed, tokens and lifetime_tokens all grow by the amount
#[tokio::test]
async fn adds_amount_to_all_counters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    ProfileFactory::new(db)
        .user_id("5")
        .lifetime_farmed(3)
        .tokens(2)
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let updated = repo.increment_farmed(5, 4).await?;

    assert!(updated);
    let profile = repo.find_by_user_id(5).await?.unwrap();
    assert_eq!(profile.lifetime_farmed, 7);
    assert_eq!(profile.tokens, 6);
    assert_eq!(profile.lifetime_tokens, 6);

    Ok(())
}

/// Tests incrementing a missing profile.
///
/// Expected: Ok(false) and no row created
#[tokio::test]
async fn reports_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let updated = repo.increment_farmed(5, 4).await?;

    assert!(!updated);
    assert!(repo.find_by_user_id(5).await?.is_none());

    Ok(())
}
