//! Ready event handler for bot initialization.
//!
//! Registers the `/farm` command and starts the presence rotation the first
//! time the bot connects.

use serenity::all::{Command, Context, GuildId, Ready};
use std::sync::atomic::Ordering;

use crate::{
    bot::{command, handler::Handler},
    scheduler::presence,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Commands are registered globally and, when a dev guild is configured, to
/// that guild as well since guild commands update instantly.
pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if let Err(e) = Command::create_global_command(&ctx.http, command::register()).await {
        tracing::error!("Failed to register global commands: {}", e);
    }

    if let Some(guild_id) = handler.dev_guild_id {
        match GuildId::new(guild_id)
            .set_commands(&ctx.http, vec![command::register()])
            .await
        {
            Ok(_) => tracing::info!("Registered commands in dev guild {}", guild_id),
            Err(e) => tracing::error!("Failed to register dev guild commands: {}", e),
        }
    }

    if !handler.presence_started.swap(true, Ordering::SeqCst) {
        if let Err(e) = presence::start_scheduler(handler.state.stats.clone(), ctx).await {
            tracing::error!("Failed to start presence scheduler: {}", e);
        }
    }
}
