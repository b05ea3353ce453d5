use super::*;

/// Tests moving a farm to another channel.
///
/// Expected: Ok(true) and the new channel stored
#[tokio::test]
async fn replaces_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    FarmFactory::new(db)
        .server_id("10")
        .farm_channel(None)
        .build()
        .await?;

    let repo = FarmRepository::new(db);
    let updated = repo.set_channel(10, 55, Utc::now()).await?;

    assert!(updated);
    let farm = repo.find_by_server_id(10).await?.unwrap();
    assert_eq!(farm.farm_channel, Some(55));

    Ok(())
}

/// Tests setting the channel of a server without a farm.
///
/// Expected: Ok(false) and no farm created
#[tokio::test]
async fn reports_missing_farm() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FarmRepository::new(db);
    assert!(!repo.set_channel(10, 55, Utc::now()).await?);
    assert!(repo.find_by_server_id(10).await?.is_none());

    Ok(())
}
