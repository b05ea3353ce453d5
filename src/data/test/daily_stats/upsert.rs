use super::*;

/// Tests archiving a day for the first time.
///
/// Expected: the snapshot can be restored unchanged
#[tokio::test]
async fn inserts_new_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut aggregate = DailyAggregate::new(day(5));
    aggregate.record_action(&farm(1, Some(3)), 10, 2);
    aggregate.record_action(&farm(1, Some(3)), 11, 2);

    let repo = DailyStatsRepository::new(db);
    repo.upsert(&aggregate, Utc::now()).await?;

    let stored = repo.find_by_day(day(5)).await?.unwrap();
    assert_eq!(stored, aggregate);

    Ok(())
}

/// Tests archiving a day that already has a snapshot.
///
/// Expected: the existing row is replaced rather than duplicated
#[tokio::test]
async fn replaces_existing_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    DailyStatsFactory::new(db, day(5))
        .total_farmed(1)
        .users(json!({ "10": 1 }))
        .build()
        .await?;

    let mut aggregate = DailyAggregate::new(day(5));
    aggregate.record_action(&farm(1, None), 10, 4);

    let repo = DailyStatsRepository::new(db);
    repo.upsert(&aggregate, Utc::now()).await?;

    let stored = repo.find_by_day(day(5)).await?.unwrap();
    assert_eq!(stored.total_farmed, 4);
    assert_eq!(stored.user_total(10), 4);
    assert_eq!(repo.delete_all().await?, 1);

    Ok(())
}
