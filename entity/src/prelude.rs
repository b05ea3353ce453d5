pub use super::daily_stats::Entity as DailyStats;
pub use super::farm::Entity as Farm;
pub use super::profile::Entity as Profile;
