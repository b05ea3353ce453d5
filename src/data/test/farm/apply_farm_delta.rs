use super::*;

/// Tests recording a farm action against a farm.
///
/// Expected: total grows by the amount and the actor becomes last_actor
#[tokio::test]
async fn bumps_total_and_last_actor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    FarmFactory::new(db)
        .server_id("10")
        .total_farmed(5)
        .last_actor(Some("1".to_string()))
        .build()
        .await?;

    let repo = FarmRepository::new(db);
    let updated = repo.apply_farm_delta(10, 3, 2, Utc::now()).await?;

    assert!(updated);
    let farm = repo.find_by_server_id(10).await?.unwrap();
    assert_eq!(farm.total_farmed, 8);
    assert_eq!(farm.last_actor, Some(2));

    Ok(())
}

/// Tests recording a farm action for a server without a farm.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_farm() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FarmRepository::new(db);
    assert!(!repo.apply_farm_delta(10, 3, 2, Utc::now()).await?);

    Ok(())
}
