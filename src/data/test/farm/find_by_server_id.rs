use super::*;

/// Tests finding a configured farm.
///
/// Expected: Ok(Some) with string IDs parsed back to u64
#[tokio::test]
async fn finds_existing_farm() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    FarmFactory::new(db)
        .server_id("10")
        .last_actor(Some("3".to_string()))
        .farm_channel(Some("4".to_string()))
        .daily_goal(Some(25))
        .build()
        .await?;

    let repo = FarmRepository::new(db);
    let farm = repo.find_by_server_id(10).await?.unwrap();

    assert_eq!(farm.last_actor, Some(3));
    assert_eq!(farm.farm_channel, Some(4));
    assert_eq!(farm.daily_goal, Some(25));
    assert!(farm.is_ready());

    Ok(())
}

/// Tests finding a server that was never set up.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_server() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FarmRepository::new(db);
    assert!(repo.find_by_server_id(10).await?.is_none());

    Ok(())
}

/// Tests reading a farm whose stored ID is not a number.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_on_malformed_channel_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    FarmFactory::new(db)
        .server_id("10")
        .farm_channel(Some("general".to_string()))
        .build()
        .await?;

    let repo = FarmRepository::new(db);
    let result = repo.find_by_server_id(10).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
