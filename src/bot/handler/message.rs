//! The 🍄 farm trigger.

use serenity::all::{Context, CreateEmbed, CreateMessage, Message};

use crate::{
    bot::embed,
    error::{farm::FarmError, AppError},
    model::outcome::FarmOutcome,
    service::farm::FarmService,
    state::AppState,
};

/// Message content that counts as one farm action.
pub const FARM_TRIGGER: &str = "🍄";

/// Mushrooms farmed by one trigger message.
const FARM_AMOUNT: i64 = 1;

/// Handles a message, farming when it is the trigger in a farm channel.
///
/// Bot messages, direct messages and anything other than the exact trigger are
/// ignored, as are triggers outside the server's farm channel.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot || message.content != FARM_TRIGGER {
        return;
    }
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let result = farm(
        state,
        guild_id.get(),
        message.channel_id.get(),
        message.author.id.get(),
    )
    .await;

    match result {
        Ok(None) => {}
        Ok(Some(outcome)) => {
            if let Err(e) = message.react(&ctx.http, '🍄').await {
                tracing::warn!("Failed to react to farm message: {}", e);
            }
            let embeds = embed::farm_outcome(&outcome, &message.author.name);
            reply(&ctx, &message, embeds).await;
        }
        Err(err) => {
            if let AppError::FarmErr(FarmError::TurnViolation { .. }) = err {
                if let Err(e) = message.react(&ctx.http, '❌').await {
                    tracing::warn!("Failed to react to farm message: {}", e);
                }
            }
            reply(&ctx, &message, vec![err.to_embed()]).await;
        }
    }
}

/// Runs the farm action under the server's gate.
///
/// # Returns
/// - `Ok(Some(FarmOutcome))` - The action was applied
/// - `Ok(None)` - The trigger was posted outside the farm channel
/// - `Err(AppError::FarmErr(FarmNotFound))` - No farm or no farm channel set up
/// - `Err(AppError)` - Turn violation or a store failure
async fn farm(
    state: &AppState,
    server_id: u64,
    channel_id: u64,
    user_id: u64,
) -> Result<Option<FarmOutcome>, AppError> {
    let _guard = state.gate.acquire(server_id).await;

    let config = FarmService::new(&state.db, state.clock.as_ref())
        .get_farm(server_id)
        .await?
        .filter(|config| config.is_ready())
        .ok_or(FarmError::FarmNotFound(server_id))?;

    if config.farm_channel != Some(channel_id) {
        return Ok(None);
    }

    let outcome = state
        .engine
        .perform_farm(&config, user_id, FARM_AMOUNT, false)
        .await?;

    Ok(Some(outcome))
}

/// Replies to the trigger, falling back to a plain channel message when the
/// trigger can no longer be referenced (e.g. it was deleted).
async fn reply(ctx: &Context, message: &Message, embeds: Vec<CreateEmbed>) {
    let builder = CreateMessage::new()
        .embeds(embeds.clone())
        .reference_message(message);

    if let Err(e) = message.channel_id.send_message(&ctx.http, builder).await {
        tracing::warn!("Failed to reply to farm message, sending to channel: {}", e);

        let fallback = CreateMessage::new().embeds(embeds);
        if let Err(e) = message.channel_id.send_message(&ctx.http, fallback).await {
            tracing::error!(
                "Failed to send farm result to channel {}: {}",
                message.channel_id,
                e
            );
        }
    }
}
