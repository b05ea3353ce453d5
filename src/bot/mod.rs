//! Discord presentation layer.
//!
//! Turns gateway events into service calls and renders their results as
//! embeds. The 🍄 trigger message drives `FarmEngine`; the `/farm` slash
//! command covers setup, configuration and stats.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MESSAGES` - Receive messages posted in farm channels
//! - `MESSAGE_CONTENT` - Read the message text to detect the trigger (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
