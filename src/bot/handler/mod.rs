use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;
use std::sync::atomic::AtomicBool;

use crate::state::AppState;

pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    pub dev_guild_id: Option<u64>,
    /// Set once the presence job runs, so reconnects do not start another
    pub presence_started: AtomicBool,
}

impl Handler {
    pub fn new(state: AppState, dev_guild_id: Option<u64>) -> Self {
        Self {
            state,
            dev_guild_id,
            presence_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called for every message the bot can see
    async fn message(&self, ctx: Context, new_message: Message) {
        message::handle_message(&self.state, ctx, new_message).await;
    }

    /// Called when a user invokes a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.state, ctx, interaction).await;
    }
}
