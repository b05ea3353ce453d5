use super::*;

/// Tests saving a profile changed in memory.
///
/// Expected: every counter and the rank ordinal are written back
#[tokio::test]
async fn writes_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let entity = ProfileFactory::new(db).user_id("8").build().await?;

    let mut profile = Profile::from_entity(entity)?;
    profile.apply_farm_delta(60);
    profile.award_tokens(5);
    let profile = profile.recompute_rank();

    let repo = ProfileRepository::new(db);
    repo.save(&profile).await?;

    let stored = repo.find_by_user_id(8).await?.unwrap();
    assert_eq!(stored.lifetime_farmed, 60);
    assert_eq!(stored.lifetime_tokens, 65);
    assert_eq!(stored.rank_ordinal, 1);
    assert_eq!(stored.tokens, 65);

    Ok(())
}
