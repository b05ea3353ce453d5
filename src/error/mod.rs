//! Error types and user-facing error rendering.
//!
//! This module provides the application's error hierarchy. `AppError` is the
//! top-level error type wrapping domain-specific errors. Farm validation
//! failures (`FarmError`) are expected control flow and carry their own
//! user-facing embeds, while every other variant is a system failure that is
//! logged and shown to the user as a generic message.

pub mod config;
pub mod farm;
pub mod internal;

use serenity::all::{Colour, CreateEmbed};
use thiserror::Error;

use crate::error::{config::ConfigError, farm::FarmError, internal::InternalError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion so services can
/// propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Farming rule violated by the request (turn order, missing setup, ...).
    ///
    /// Never a system fault; rendered with its own embed and never logged as
    /// an error.
    #[error(transparent)]
    FarmErr(#[from] FarmError),

    /// Stored data that could not be converted into domain models.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Store failures are propagated as-is; the engine never guesses whether a
    /// partial write landed.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Whether this error is an expected rule violation rather than a fault.
    ///
    /// # Returns
    /// - `true` - For `FarmErr`, which the user can fix themselves
    /// - `false` - For every store, Discord, scheduler or internal failure
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::FarmErr(_))
    }

    /// Converts the error into an embed that can be shown to the user.
    ///
    /// Farm errors delegate to `FarmError::to_embed()`. Every other error is
    /// logged with full details and rendered as a generic failure to avoid
    /// leaking implementation details into the channel.
    pub fn to_embed(&self) -> CreateEmbed {
        if !self.is_expected() {
            tracing::error!("{}", self);
        }

        match self {
            Self::FarmErr(err) => err.to_embed(),
            _ => error_embed("An unknown error has occurred"),
        }
    }
}

/// Builds the red "Error!" embed used for failures without a dedicated message.
pub fn error_embed(description: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Error!")
        .description(description)
        .colour(Colour::RED)
}
