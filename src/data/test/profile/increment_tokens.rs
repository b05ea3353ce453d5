use super::*;

/// Tests paying bonus tokens to a contributor.
///
/// Expected: only token balances change; lifetime_farmed is untouched
#[tokio::test]
async fn pays_tokens_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    ProfileFactory::new(db)
        .user_id("1")
        .lifetime_farmed(9)
        .tokens(1)
        .build()
        .await?;
    ProfileFactory::new(db).user_id("2").build().await?;

    let repo = ProfileRepository::new(db);
    let updated = repo.increment_tokens(1, 10).await?;

    assert!(updated);
    let paid = repo.find_by_user_id(1).await?.unwrap();
    assert_eq!(paid.tokens, 11);
    assert_eq!(paid.lifetime_tokens, 11);
    assert_eq!(paid.lifetime_farmed, 9);
    let untouched = repo.find_by_user_id(2).await?.unwrap();
    assert_eq!(untouched.tokens, 0);

    Ok(())
}

/// Tests paying a user without a profile.
///
/// Expected: Ok(false) and no row created
#[tokio::test]
async fn reports_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    assert!(!repo.increment_tokens(1, 10).await?);
    assert!(repo.find_by_user_id(1).await?.is_none());

    Ok(())
}
