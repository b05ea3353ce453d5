//! Embeds shown in reply to farm actions and commands.

use serenity::all::{Colour, CreateEmbed};

use crate::{
    bot::command::Period,
    model::{daily::Contribution, farm::FarmConfig, outcome::FarmOutcome, profile::Profile},
    util::format::ordinal,
};

/// Number of entries shown on a leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

fn success(description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title("Success!")
        .description(description)
        .colour(Colour::DARK_GREEN)
}

/// Reply to a successful farm action, in display order.
///
/// Always contains the "Mushroom farmed!" embed, followed by the goal and
/// rank-up announcements when they apply.
pub fn farm_outcome(outcome: &FarmOutcome, user_name: &str) -> Vec<CreateEmbed> {
    let mut description = format!(
        "{} mushroom farmed today!",
        ordinal(outcome.farmed_today)
    );
    if let Some(remaining) = outcome.remaining_to_goal() {
        description.push_str(&format!(
            "\n{} more mushrooms till the daily goal!",
            remaining
        ));
    }

    let mut embeds = vec![CreateEmbed::new()
        .title("Mushroom farmed!")
        .description(description)
        .colour(Colour::DARK_GREEN)];

    if outcome.awarding_daily {
        embeds.push(daily_goal_reached());
    }
    if outcome.ranked_up {
        embeds.push(
            CreateEmbed::new()
                .title(format!("{} ranked up!", user_name))
                .description(format!(
                    "Your rank is now `{}`!",
                    outcome.profile.rank().name
                ))
                .colour(Colour::DARK_GREEN),
        );
    }

    embeds
}

pub fn daily_goal_reached() -> CreateEmbed {
    CreateEmbed::new()
        .title("Daily goal reached!")
        .description("All contributors have been awarded double Shroom Tokens!")
        .colour(Colour::DARK_GREEN)
}

pub fn farm_created(channel_id: u64) -> CreateEmbed {
    success(format!(
        "Farm created successfully, send a 🍄 in <#{}> to start farming!",
        channel_id
    ))
}

pub fn channel_changed(channel_id: u64) -> CreateEmbed {
    success(format!(
        "The farm channel has been successfully changed to <#{}>",
        channel_id
    ))
}

pub fn daily_goal_set(goal: Option<i64>) -> CreateEmbed {
    match goal {
        Some(goal) => success(format!(
            "The daily goal has been successfully changed to `{}`\n\
             If you have already farmed mushrooms today, the daily goal will only apply tomorrow!",
            goal
        )),
        None => success(
            "The daily goal has been removed\n\
             If you have already farmed mushrooms today, today's goal still applies!",
        ),
    }
}

/// Server overview for `/farm farmstats`.
pub fn farm_stats(config: &FarmConfig, today: i64, weekly: i64) -> CreateEmbed {
    let goal = config
        .daily_goal
        .map_or_else(|| "None".to_string(), |goal| goal.to_string());
    let channel = config
        .farm_channel
        .map_or_else(|| "Not set".to_string(), |id| format!("<#{}>", id));

    CreateEmbed::new()
        .title("Farm stats")
        .field("Farmed today", today.to_string(), true)
        .field("Farmed this week", weekly.to_string(), true)
        .field("Farmed all time", config.total_farmed.to_string(), true)
        .field("Daily goal", goal, true)
        .field("Farm channel", channel, true)
        .colour(Colour::DARK_GREEN)
}

/// User overview for `/farm userstats`.
pub fn user_stats(user_name: &str, profile: &Profile, today: i64, weekly: i64) -> CreateEmbed {
    let next = match profile.next_rank() {
        Some(next) => format!("`{}` at {}", next.name, next.requirement),
        None => "Max rank reached".to_string(),
    };

    CreateEmbed::new()
        .title(format!("{}'s stats", user_name))
        .field("Rank", format!("`{}`", profile.rank().name), true)
        .field("Next rank", next, true)
        .field("Shroom Tokens", profile.tokens.to_string(), true)
        .field("Farmed today", today.to_string(), true)
        .field("Farmed this week", weekly.to_string(), true)
        .field("Farmed all time", profile.lifetime_farmed.to_string(), true)
        .colour(Colour::DARK_GREEN)
}

pub fn account_not_found() -> CreateEmbed {
    CreateEmbed::new()
        .title("Account not found!")
        .description("User has not started farming yet")
        .colour(Colour::RED)
}

/// Goal contributors ranked by credited amount.
pub fn leaderboard(period: Period, contributors: &[Contribution]) -> CreateEmbed {
    let title = match period {
        Period::Daily => "Today's top farmers",
        Period::Weekly => "This week's top farmers",
    };

    let description = if contributors.is_empty() {
        "Nobody has contributed to the daily goal yet".to_string()
    } else {
        contributors
            .iter()
            .take(LEADERBOARD_SIZE)
            .enumerate()
            .map(|(i, c)| format!("**{}.** <@{}> - {}", i + 1, c.user_id, c.amount))
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(Colour::DARK_GREEN)
}

pub fn tokens_set(user_id: u64, tokens: i64) -> CreateEmbed {
    success(format!("<@{}> now has {} Shroom Tokens", user_id, tokens))
}

pub fn rank_set(user_id: u64, rank_name: &str) -> CreateEmbed {
    success(format!("<@{}> is now `{}`", user_id, rank_name))
}

pub fn missing_permissions() -> CreateEmbed {
    crate::error::error_embed("You do not have the required permissions to run this command")
}
