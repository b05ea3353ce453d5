//! The `/farm` slash command: registration and option parsing.

use serenity::all::{
    ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, ResolvedOption,
    ResolvedValue,
};

use crate::model::rank::RANKS;

pub const COMMAND_NAME: &str = "farm";

/// Period a leaderboard covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
}

impl Period {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }
}

/// A parsed `/farm` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FarmCommand {
    Setup { channel_id: Option<u64> },
    SetChannel { channel_id: u64 },
    /// `None` removes the goal
    SetDailyGoal { goal: Option<i64> },
    FarmStats,
    UserStats { user: Option<(u64, String)> },
    Leaderboard { period: Period },
    SetTokens { user_id: u64, tokens: i64 },
    SetRank { user_id: u64, rank_ordinal: usize },
}

impl FarmCommand {
    /// Parses the resolved options of a `/farm` interaction.
    ///
    /// Returns `None` for an unknown subcommand or a missing required option.
    pub fn from_options(options: &[ResolvedOption]) -> Option<Self> {
        let first = options.first()?;
        let ResolvedValue::SubCommand(args) = &first.value else {
            return None;
        };

        let command = match first.name {
            "setup" => Self::Setup {
                channel_id: channel(args, "channel"),
            },
            "setchannel" => Self::SetChannel {
                channel_id: channel(args, "channel")?,
            },
            "setdailygoal" => Self::SetDailyGoal {
                goal: integer(args, "goal"),
            },
            "farmstats" => Self::FarmStats,
            "userstats" => Self::UserStats {
                user: user(args, "user"),
            },
            "leaderboard" => Self::Leaderboard {
                period: string(args, "period")
                    .and_then(Period::parse)
                    .unwrap_or(Period::Daily),
            },
            "settokens" => Self::SetTokens {
                user_id: user(args, "user")?.0,
                tokens: integer(args, "tokens")?,
            },
            "setrank" => Self::SetRank {
                user_id: user(args, "user")?.0,
                rank_ordinal: usize::try_from(integer(args, "rank")?).ok()?,
            },
            _ => return None,
        };

        Some(command)
    }

    /// Subcommands that change server configuration.
    pub fn requires_manage_guild(&self) -> bool {
        matches!(
            self,
            Self::Setup { .. } | Self::SetChannel { .. } | Self::SetDailyGoal { .. }
        )
    }

    /// Subcommands that override user balances or ranks.
    pub fn requires_administrator(&self) -> bool {
        matches!(self, Self::SetTokens { .. } | Self::SetRank { .. })
    }
}

fn find<'a>(args: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a ResolvedValue<'a>> {
    args.iter().find(|o| o.name == name).map(|o| &o.value)
}

fn channel(args: &[ResolvedOption], name: &str) -> Option<u64> {
    match find(args, name)? {
        ResolvedValue::Channel(channel) => Some(channel.id.get()),
        _ => None,
    }
}

fn integer(args: &[ResolvedOption], name: &str) -> Option<i64> {
    match find(args, name)? {
        ResolvedValue::Integer(value) => Some(*value),
        _ => None,
    }
}

fn string<'a>(args: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    match find(args, name)? {
        ResolvedValue::String(value) => Some(*value),
        _ => None,
    }
}

fn user(args: &[ResolvedOption], name: &str) -> Option<(u64, String)> {
    match find(args, name)? {
        ResolvedValue::User(user, _) => Some((user.id.get(), user.name.clone())),
        _ => None,
    }
}

/// Builds the `/farm` command with all of its subcommands.
pub fn register() -> CreateCommand {
    let rank_option = CreateCommandOption::new(CommandOptionType::Integer, "rank", "New rank")
        .required(true)
        .add_int_choice(RANKS[0].name, 0);
    let rank_option = RANKS
        .iter()
        .skip(1)
        .fold(rank_option, |option, rank| {
            option.add_int_choice(rank.name, rank.ordinal as i32)
        });

    CreateCommand::new(COMMAND_NAME)
        .description("Mushroom farming")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "setup",
                "Set up this server's farm",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Channel where mushrooms are farmed",
                )
                .channel_types(vec![ChannelType::Text]),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "setchannel",
                "Change the farm channel",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Channel where mushrooms are farmed",
                )
                .channel_types(vec![ChannelType::Text])
                .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "setdailygoal",
                "Set the daily goal, or remove it when no goal is given",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "goal",
                    "Mushrooms to farm each day",
                )
                .min_int_value(1),
            ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "farmstats",
            "Show this server's farm stats",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "userstats",
                "Show a user's farming stats",
            )
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "User to show, yourself by default",
            )),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "leaderboard",
                "Show the top daily goal contributors",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "period", "Period to rank")
                    .add_string_choice("Today", "daily")
                    .add_string_choice("This week", "weekly"),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "settokens",
                "Overwrite a user's Shroom Token balance",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "User to change")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::Integer, "tokens", "New balance")
                    .min_int_value(0)
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "setrank",
                "Overwrite a user's rank",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "User to change")
                    .required(true),
            )
            .add_sub_option(rank_option),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leaderboard_period() {
        assert_eq!(Period::parse("daily"), Some(Period::Daily));
        assert_eq!(Period::parse("weekly"), Some(Period::Weekly));
        assert_eq!(Period::parse("monthly"), None);
    }

    #[test]
    fn permission_groups() {
        assert!(FarmCommand::SetDailyGoal { goal: None }.requires_manage_guild());
        assert!(!FarmCommand::FarmStats.requires_manage_guild());
        assert!(FarmCommand::SetRank {
            user_id: 1,
            rank_ordinal: 0
        }
        .requires_administrator());
        assert!(!FarmCommand::Leaderboard {
            period: Period::Daily
        }
        .requires_administrator());
    }

    #[test]
    fn rank_option_offers_every_rank() {
        let command = serde_json::to_value(register()).unwrap();
        let setrank = command["options"]
            .as_array()
            .unwrap()
            .iter()
            .find(|o| o["name"] == "setrank")
            .unwrap();
        let choices = setrank["options"][1]["choices"].as_array().unwrap();

        assert_eq!(choices.len(), RANKS.len());
        assert_eq!(choices[14]["name"], "Shroom Deity");
    }
}
