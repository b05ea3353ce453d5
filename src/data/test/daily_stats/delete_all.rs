use super::*;

/// Tests clearing the archive at the weekly reset.
///
/// Expected: every snapshot deleted and the count returned
#[tokio::test]
async fn deletes_every_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    create_daily_stats(db, day(2)).await?;
    create_daily_stats(db, day(3)).await?;

    let repo = DailyStatsRepository::new(db);
    let deleted = repo.delete_all().await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_latest().await?.is_none());

    Ok(())
}
