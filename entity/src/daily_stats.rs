use sea_orm::entity::prelude::*;

/// Archived snapshot of one day's farming activity.
///
/// `farms` holds the per-server stats keyed by server ID and `users` the
/// per-user totals keyed by user ID, both as JSON objects.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub day: Date,
    pub total_farmed: i64,
    pub farms: Json,
    pub users: Json,
    pub archived_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
