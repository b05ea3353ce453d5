use crate::model::profile::Profile;

/// Everything that changed because of one farm action.
///
/// Owned and cloneable so the presentation layer can re-render it after the
/// fact, e.g. when the trigger message was deleted and the reply has to go to
/// the channel instead.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmOutcome {
    /// Server total for today, including this action
    pub farmed_today: i64,
    /// Goal snapshot of today's period, if any
    pub daily_goal: Option<i64>,
    pub goal_reached: bool,
    /// The acting user moved to a higher rank
    pub ranked_up: bool,
    /// This action reached the goal and contributors were paid out
    pub awarding_daily: bool,
    /// The acting user's profile after the action
    pub profile: Profile,
}

impl FarmOutcome {
    /// Mushrooms still needed today, `None` without a goal or once reached.
    pub fn remaining_to_goal(&self) -> Option<i64> {
        match self.daily_goal {
            Some(goal) if !self.goal_reached => Some(goal - self.farmed_today),
            _ => None,
        }
    }
}
