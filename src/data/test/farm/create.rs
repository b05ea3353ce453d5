use super::*;

/// Tests setting up a farm for a new server.
///
/// Expected: Ok with zeroed counters, the given channel and no goal
#[tokio::test]
async fn creates_farm_with_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FarmRepository::new(db);
    let farm = repo.create(10, Some(77), Utc::now()).await?;

    assert_eq!(farm.server_id, 10);
    assert_eq!(farm.total_farmed, 0);
    assert_eq!(farm.last_actor, None);
    assert_eq!(farm.farm_channel, Some(77));
    assert_eq!(farm.daily_goal, None);

    Ok(())
}

/// Tests setting up a server that already has a farm.
///
/// Expected: Err(FarmAlreadyExists) and the stored farm unchanged
#[tokio::test]
async fn rejects_existing_farm() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    FarmFactory::new(db)
        .server_id("10")
        .total_farmed(40)
        .farm_channel(Some("1".to_string()))
        .build()
        .await?;

    let repo = FarmRepository::new(db);
    let result = repo.create(10, Some(2), Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::FarmErr(FarmError::FarmAlreadyExists(10)))
    ));
    let farm = repo.find_by_server_id(10).await?.unwrap();
    assert_eq!(farm.total_farmed, 40);
    assert_eq!(farm.farm_channel, Some(1));

    Ok(())
}
