//! `/farm` slash command dispatch.

use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, Interaction, Permissions,
};

use crate::{
    bot::{
        command::{FarmCommand, Period, COMMAND_NAME},
        embed,
    },
    error::{error_embed, farm::FarmError, AppError},
    model::rank,
    service::{farm::FarmService, profile::ProfileService},
    state::AppState,
};

/// Handles an interaction, answering `/farm` commands with a single embed.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };
    if command.data.name != COMMAND_NAME {
        return;
    }

    let embed = match run(state, &command).await {
        Ok(embed) => embed,
        Err(err) => err.to_embed(),
    };

    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed));
    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{} command: {}", COMMAND_NAME, e);
    }
}

async fn run(state: &AppState, command: &CommandInteraction) -> Result<CreateEmbed, AppError> {
    let Some(guild_id) = command.guild_id else {
        return Ok(error_embed("This command can only be used in a server"));
    };
    let options = command.data.options();
    let Some(parsed) = FarmCommand::from_options(&options) else {
        return Ok(error_embed("Unknown command"));
    };

    let permissions = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .unwrap_or_else(Permissions::empty);
    let is_admin = permissions.contains(Permissions::ADMINISTRATOR);
    if (parsed.requires_manage_guild() && !is_admin && !permissions.contains(Permissions::MANAGE_GUILD))
        || (parsed.requires_administrator() && !is_admin)
    {
        return Ok(embed::missing_permissions());
    }

    let server_id = guild_id.get();
    let farms = FarmService::new(&state.db, state.clock.as_ref());
    let profiles = ProfileService::new(&state.db, state.clock.as_ref());

    let embed = match parsed {
        FarmCommand::Setup { channel_id } => {
            let channel_id = channel_id.unwrap_or_else(|| command.channel_id.get());
            farms.setup_farm(server_id, Some(channel_id)).await?;
            embed::farm_created(channel_id)
        }
        FarmCommand::SetChannel { channel_id } => {
            farms.set_channel(server_id, channel_id).await?;
            embed::channel_changed(channel_id)
        }
        FarmCommand::SetDailyGoal { goal } => {
            farms.set_daily_goal(server_id, goal).await?;
            embed::daily_goal_set(goal)
        }
        FarmCommand::FarmStats => {
            let farm = farms
                .get_farm(server_id)
                .await?
                .ok_or(FarmError::FarmNotFound(server_id))?;
            let today = state.stats.server_today(server_id).await;
            let weekly = state.stats.server_weekly(server_id).await?;
            embed::farm_stats(&farm, today, weekly)
        }
        FarmCommand::UserStats { user } => {
            let (user_id, name) =
                user.unwrap_or_else(|| (command.user.id.get(), command.user.name.clone()));
            match profiles.get(user_id).await? {
                Some(profile) => {
                    let today = state.stats.user_today(user_id).await;
                    let weekly = state.stats.user_weekly(user_id).await?;
                    embed::user_stats(&name, &profile, today, weekly)
                }
                None => embed::account_not_found(),
            }
        }
        FarmCommand::Leaderboard { period } => {
            let contributors = match period {
                Period::Daily => state.stats.top_daily_contributors(server_id).await,
                Period::Weekly => state.stats.top_weekly_contributors(server_id).await?,
            };
            embed::leaderboard(period, &contributors)
        }
        FarmCommand::SetTokens { user_id, tokens } => {
            if profiles.set_tokens(user_id, tokens).await? {
                tracing::info!("{} set tokens of {} to {}", command.user.id, user_id, tokens);
                embed::tokens_set(user_id, tokens)
            } else {
                embed::account_not_found()
            }
        }
        FarmCommand::SetRank {
            user_id,
            rank_ordinal,
        } => {
            let Some(new_rank) = rank::rank(rank_ordinal) else {
                return Ok(error_embed("Unknown rank"));
            };
            if profiles.set_rank(user_id, rank_ordinal).await? {
                tracing::info!(
                    "{} set rank of {} to {}",
                    command.user.id,
                    user_id,
                    new_rank.name
                );
                embed::rank_set(user_id, new_rank.name)
            } else {
                embed::account_not_found()
            }
        }
    };

    Ok(embed)
}
