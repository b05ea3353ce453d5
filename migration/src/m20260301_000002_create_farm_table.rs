use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Farm::Table)
                    .if_not_exists()
                    .col(string(Farm::ServerId).primary_key())
                    .col(big_integer(Farm::TotalFarmed).default(0))
                    .col(string_null(Farm::LastActor))
                    .col(string_null(Farm::FarmChannel))
                    .col(big_integer_null(Farm::DailyGoal))
                    .col(timestamp(Farm::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Farm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Farm {
    Table,
    ServerId,
    TotalFarmed,
    LastActor,
    FarmChannel,
    DailyGoal,
    UpdatedAt,
}
