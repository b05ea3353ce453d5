//! Cron jobs running alongside the bot.

pub mod daily_reset;
pub mod presence;
