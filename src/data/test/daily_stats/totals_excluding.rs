use super::*;

/// Tests summing archived totals while skipping the live day.
///
/// Expected: only rows of other days are counted
#[tokio::test]
async fn skips_excluded_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    DailyStatsFactory::new(db, day(2))
        .total_farmed(4)
        .users(json!({ "1": 3, "2": 1 }))
        .build()
        .await?;
    DailyStatsFactory::new(db, day(3))
        .total_farmed(6)
        .users(json!({ "1": 6 }))
        .build()
        .await?;
    DailyStatsFactory::new(db, day(4))
        .total_farmed(100)
        .users(json!({ "1": 100 }))
        .build()
        .await?;

    let repo = DailyStatsRepository::new(db);

    assert_eq!(repo.total_farmed_excluding(day(4)).await?, 10);

    let users = repo.users_excluding(day(4)).await?;
    assert_eq!(users.len(), 2);
    let user_one: i64 = users.iter().filter_map(|u| u.get(&1)).sum();
    assert_eq!(user_one, 9);

    Ok(())
}

/// Tests reading archived per-server stats in day order.
///
/// Expected: one map per archived day, oldest first
#[tokio::test]
async fn returns_farms_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut later = DailyAggregate::new(day(3));
    later.record_action(&farm(7, None), 1, 2);
    let mut earlier = DailyAggregate::new(day(2));
    earlier.record_action(&farm(7, None), 1, 5);

    let repo = DailyStatsRepository::new(db);
    repo.upsert(&later, Utc::now()).await?;
    repo.upsert(&earlier, Utc::now()).await?;

    let farms = repo.farms_excluding(day(9)).await?;

    assert_eq!(farms.len(), 2);
    assert_eq!(farms[0][&7].farmed_today, 5);
    assert_eq!(farms[1][&7].farmed_today, 2);

    Ok(())
}
