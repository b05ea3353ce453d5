use sea_orm::entity::prelude::*;

/// Lifetime farming state of a single Discord user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub joined_at: DateTimeUtc,
    pub lifetime_farmed: i64,
    pub tokens: i64,
    pub lifetime_tokens: i64,
    pub rank_ordinal: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
