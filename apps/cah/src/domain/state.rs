use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::rules::{NumberField, RuleFlags};

pub type UserId = u64;

/// Participant key in [`CahState::players`].
///
/// `Rando` is the reserved synthetic player; it never arrives through join/leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerId {
    User(UserId),
    Rando,
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PlayerId::User(id) => write!(f, "<@{id}>"),
            PlayerId::Rando => write!(f, "`Rando Cardrissian`"),
        }
    }
}

/// Per-participant record handed to the gameplay phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    /// Response cards held.
    pub hand: Vec<String>,
    /// Cards committed to the active round.
    pub playing: Vec<String>,
    pub points: u32,
    pub hidden: bool,
}

/// Game configuration and seeded state.
///
/// Owned by the setup controller until the lobby starts. The numeric settings
/// are only reachable through [`CahState::set_number`] and
/// [`CahState::step_number`], which clamp to the field bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CahState {
    pub flags: RuleFlags,
    max_points: u32,
    hand_cards: u32,
    pub white_deck: Vec<String>,
    pub black_deck: Vec<String>,
    pub players: BTreeMap<PlayerId, PlayerState>,
}

impl Default for CahState {
    fn default() -> Self {
        Self {
            flags: RuleFlags::default(),
            max_points: NumberField::MaxPoints.default_value(),
            hand_cards: NumberField::HandCards.default_value(),
            white_deck: Vec::new(),
            black_deck: Vec::new(),
            players: BTreeMap::new(),
        }
    }
}

impl CahState {
    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    pub fn hand_cards(&self) -> u32 {
        self.hand_cards
    }

    pub fn number(&self, field: NumberField) -> u32 {
        match field {
            NumberField::MaxPoints => self.max_points,
            NumberField::HandCards => self.hand_cards,
        }
    }

    /// Write a numeric setting, clamped to its bounds. Returns the stored value.
    pub fn set_number(&mut self, field: NumberField, value: i64) -> u32 {
        let value = field.clamp(value);
        match field {
            NumberField::MaxPoints => self.max_points = value,
            NumberField::HandCards => self.hand_cards = value,
        }
        value
    }

    /// Move a numeric setting one step, saturating at its bounds.
    pub fn step_number(&mut self, field: NumberField, delta: i64) -> u32 {
        let current = i64::from(self.number(field));
        self.set_number(field, current.saturating_add(delta))
    }

    /// Seat a user. Returns `false` if they were already seated.
    pub fn add_user(&mut self, user: UserId) -> bool {
        let key = PlayerId::User(user);
        if self.players.contains_key(&key) {
            return false;
        }
        self.players.insert(key, PlayerState::default());
        true
    }

    /// Remove a user. Returns `false` if they were not seated.
    pub fn remove_user(&mut self, user: UserId) -> bool {
        self.players.remove(&PlayerId::User(user)).is_some()
    }

    /// Number of human participants.
    pub fn human_count(&self) -> usize {
        self.players
            .keys()
            .filter(|id| matches!(id, PlayerId::User(_)))
            .count()
    }

    pub fn has_rando(&self) -> bool {
        self.players.contains_key(&PlayerId::Rando)
    }

    pub fn decks_empty(&self) -> bool {
        self.white_deck.is_empty() && self.black_deck.is_empty()
    }
}
