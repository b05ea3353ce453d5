use super::*;

/// Tests setting and then clearing a daily goal.
///
/// Expected: goal stored, then removed by None
#[tokio::test]
async fn sets_and_clears_goal() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    FarmFactory::new(db).server_id("10").build().await?;

    let repo = FarmRepository::new(db);

    assert!(repo.set_daily_goal(10, Some(30), Utc::now()).await?);
    let farm = repo.find_by_server_id(10).await?.unwrap();
    assert_eq!(farm.daily_goal, Some(30));

    assert!(repo.set_daily_goal(10, None, Utc::now()).await?);
    let farm = repo.find_by_server_id(10).await?.unwrap();
    assert_eq!(farm.daily_goal, None);

    Ok(())
}

/// Tests setting a goal for a server without a farm.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_farm() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FarmRepository::new(db);
    assert!(!repo.set_daily_goal(10, Some(30), Utc::now()).await?);

    Ok(())
}
