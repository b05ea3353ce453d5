use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(string(Profile::UserId).primary_key())
                    .col(timestamp(Profile::JoinedAt))
                    .col(big_integer(Profile::LifetimeFarmed).default(0))
                    .col(big_integer(Profile::Tokens).default(0))
                    .col(big_integer(Profile::LifetimeTokens).default(0))
                    .col(integer(Profile::RankOrdinal).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    UserId,
    JoinedAt,
    LifetimeFarmed,
    Tokens,
    LifetimeTokens,
    RankOrdinal,
}
