use serenity::all::{Colour, CreateEmbed};
use thiserror::Error;

/// Farming rule violations.
///
/// These are expected outcomes of user input, distinct from store or Discord
/// failures, and leave all state unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FarmError {
    /// Setup was requested for a server that already has a farm.
    #[error("Farm for server {0} already exists")]
    FarmAlreadyExists(u64),

    /// The server has not run setup yet.
    #[error("Farm for server {0} has not been set up")]
    FarmNotFound(u64),

    /// Explicit profile creation for a user that already has one.
    #[error("Profile for user {0} already exists")]
    ProfileAlreadyExists(u64),

    /// The same user tried to farm twice in a row in one server.
    #[error("User {user_id} was the last to farm in server {server_id}")]
    TurnViolation {
        /// Server the action was attempted in
        server_id: u64,
        /// User who farmed last and tried again
        user_id: u64,
    },

    /// A farm action must add at least one mushroom.
    #[error("Farm amount must be positive, got {0}")]
    InvalidAmount(i64),

    /// A daily goal must be positive; use no goal to disable it.
    #[error("Daily goal must be positive, got {0}")]
    InvalidGoal(i64),
}

impl FarmError {
    /// Converts the farm error into a user-facing embed.
    ///
    /// Maps each variant to the message shown in the channel:
    /// - `FarmAlreadyExists` → "Farm already exists!" pointing at `/farm setchannel`
    /// - `FarmNotFound` → "Farm not set up!" pointing at `/farm setup`
    /// - `TurnViolation` → "You cannot farm mushrooms now"
    /// - Validation errors → "Error!" with the error text
    pub fn to_embed(&self) -> CreateEmbed {
        let (title, description) = match self {
            Self::FarmAlreadyExists(_) => (
                "Farm already exists!",
                "Your server already has a farm set up, if you wish to change the farm channel, use `/farm setchannel` instead".to_string(),
            ),
            Self::FarmNotFound(_) => (
                "Farm not set up!",
                "Use `/farm setup` to setup your server and start farming!".to_string(),
            ),
            Self::ProfileAlreadyExists(_) => (
                "Account already exists!",
                "This user has already started farming".to_string(),
            ),
            Self::TurnViolation { .. } => (
                "You cannot farm mushrooms now",
                "You can only farm mushrooms one at a time".to_string(),
            ),
            Self::InvalidAmount(_) | Self::InvalidGoal(_) => ("Error!", self.to_string()),
        };

        CreateEmbed::new()
            .title(title)
            .description(description)
            .colour(Colour::RED)
    }
}
