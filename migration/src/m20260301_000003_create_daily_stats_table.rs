use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyStats::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyStats::Id))
                    .col(date(DailyStats::Day))
                    .col(big_integer(DailyStats::TotalFarmed).default(0))
                    .col(json(DailyStats::Farms))
                    .col(json(DailyStats::Users))
                    .col(timestamp(DailyStats::ArchivedAt))
                    .to_owned(),
            )
            .await?;

        // One archived snapshot per day
        manager
            .create_index(
                Index::create()
                    .name("idx_daily_stats_day")
                    .table(DailyStats::Table)
                    .col(DailyStats::Day)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_daily_stats_day")
                    .table(DailyStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DailyStats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DailyStats {
    Table,
    Id,
    Day,
    TotalFarmed,
    Farms,
    Users,
    ArchivedAt,
}
