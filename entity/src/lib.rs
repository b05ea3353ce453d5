//! SeaORM entities for the shroomfarm database.

pub mod prelude;

pub mod daily_stats;
pub mod farm;
pub mod profile;
