use crate::domain::{NumberField, Rule, UserId};
use crate::ports::Interaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Decrement,
    Increment,
}

impl Step {
    pub const fn delta(self) -> i64 {
        match self {
            Step::Decrement => -1,
            Step::Increment => 1,
        }
    }
}

/// What happened in the lobby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LobbyAction {
    /// The session accepted a join.
    Join(UserId),
    /// The session accepted a leave.
    Leave(UserId),
    TogglePack(usize),
    /// Multi-select submission: exactly these pack indices are selected.
    SelectPacks(Vec<usize>),
    ToggleRule(Rule),
    StepNumber(NumberField, Step),
    SetNumber(NumberField, i64),
    Start,
}

/// A lobby action together with the interaction that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyEvent {
    pub interaction: Interaction,
    pub action: LobbyAction,
}

impl LobbyEvent {
    pub fn new(interaction: Interaction, action: LobbyAction) -> Self {
        Self {
            interaction,
            action,
        }
    }
}
