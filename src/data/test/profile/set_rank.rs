use super::*;

/// Tests overriding a rank the user has not earned.
///
/// Expected: Ok(true) and the ordinal stored as given
#[tokio::test]
async fn overrides_without_eligibility_check() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    ProfileFactory::new(db).user_id("3").build().await?;

    let repo = ProfileRepository::new(db);
    let updated = repo.set_rank(3, 9).await?;

    assert!(updated);
    assert_eq!(repo.find_by_user_id(3).await?.unwrap().rank_ordinal, 9);

    Ok(())
}

/// Tests overriding the rank of a missing profile.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    assert!(!repo.set_rank(3, 9).await?);

    Ok(())
}
