use super::*;

/// Tests overwriting a token balance.
///
/// Expected: tokens replaced while lifetime_tokens keeps its value
#[tokio::test]
async fn overwrites_spendable_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    ProfileFactory::new(db).user_id("4").tokens(50).build().await?;

    let repo = ProfileRepository::new(db);
    let updated = repo.set_tokens(4, 5).await?;

    assert!(updated);
    let profile = repo.find_by_user_id(4).await?.unwrap();
    assert_eq!(profile.tokens, 5);
    assert_eq!(profile.lifetime_tokens, 50);

    Ok(())
}

/// Tests overwriting the balance of a missing profile.
///
/// Expected: Ok(false) and no row created
#[tokio::test]
async fn reports_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    assert!(!repo.set_tokens(4, 5).await?);
    assert!(repo.find_by_user_id(4).await?.is_none());

    Ok(())
}
