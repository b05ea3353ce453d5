use super::*;

/// Tests restoring the most recent snapshot.
///
/// Expected: the row with the highest day, with JSON columns parsed
#[tokio::test]
async fn returns_most_recent_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    DailyStatsFactory::new(db, day(4))
        .total_farmed(5)
        .farms(json!({
            "900": {
                "server_id": 900,
                "farmed_today": 5,
                "daily_goal": 10,
                "awarded": false,
                "contributors": [{ "user_id": 42, "amount": 5 }]
            }
        }))
        .users(json!({ "42": 5 }))
        .build()
        .await?;
    create_daily_stats(db, day(2)).await?;

    let repo = DailyStatsRepository::new(db);
    let aggregate = repo.find_latest().await?.unwrap();

    assert_eq!(aggregate.day, day(4));
    assert_eq!(aggregate.total_farmed, 5);
    assert_eq!(aggregate.user_total(42), 5);
    let stats = aggregate.farm_stats(900).unwrap();
    assert_eq!(stats.daily_goal, Some(10));
    assert_eq!(stats.contribution(42), 5);

    Ok(())
}

/// Tests restoring when nothing was archived.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DailyStatsRepository::new(db);
    assert!(repo.find_latest().await?.is_none());

    Ok(())
}

/// Tests restoring a snapshot with a malformed users column.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_on_malformed_json() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    DailyStatsFactory::new(db, day(4))
        .users(json!([1, 2, 3]))
        .build()
        .await?;

    let repo = DailyStatsRepository::new(db);
    let result = repo.find_latest().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
