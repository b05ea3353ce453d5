mod daily_stats;
mod farm;
mod profile;
