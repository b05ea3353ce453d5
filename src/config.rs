use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,
    /// Guild where slash commands are also registered per guild, which makes
    /// them available immediately during development
    pub dev_guild_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            dev_guild_id: parse_guild_id("DEV_GUILD_ID", std::env::var("DEV_GUILD_ID").ok())?,
        })
    }
}

/// Parses an optional guild ID variable; unset or empty means no guild.
fn parse_guild_id(name: &str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
    }
}
