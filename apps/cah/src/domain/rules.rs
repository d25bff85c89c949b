use std::ops::RangeInclusive;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 20;

pub const MIN_MAX_POINTS: u32 = 1;
pub const DEFAULT_MAX_POINTS: u32 = 8;

pub const MIN_HAND_CARDS: u32 = 5;
pub const MAX_HAND_CARDS: u32 = 20;
pub const DEFAULT_HAND_CARDS: u32 = 10;

/// Optional rule toggles, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Add the non-human Rando Cardrissian player at start.
    Rando,
    /// Players are not dealt a full hand up front.
    Quiplash,
}

impl Rule {
    pub const COUNT: usize = 2;
    pub const ALL: [Rule; Rule::COUNT] = [Rule::Rando, Rule::Quiplash];

    pub const fn index(self) -> usize {
        match self {
            Rule::Rando => 0,
            Rule::Quiplash => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rule::Rando => "Rando Cardrissian",
            Rule::Quiplash => "Quiplash",
        }
    }
}

/// Rule toggles indexed by [`Rule::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleFlags([bool; Rule::COUNT]);

impl RuleFlags {
    pub fn is_enabled(&self, rule: Rule) -> bool {
        self.0[rule.index()]
    }

    pub fn set(&mut self, rule: Rule, enabled: bool) {
        self.0[rule.index()] = enabled;
    }

    /// Flip a rule and return its new value.
    pub fn toggle(&mut self, rule: Rule) -> bool {
        let slot = &mut self.0[rule.index()];
        *slot = !*slot;
        *slot
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// `(label, enabled)` pairs in display order.
    pub fn options(&self) -> Vec<(&'static str, bool)> {
        Rule::ALL
            .iter()
            .map(|&rule| (rule.label(), self.is_enabled(rule)))
            .collect()
    }
}

/// Bounded numeric settings exposed to the configuration UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberField {
    MaxPoints,
    HandCards,
}

impl NumberField {
    pub const fn label(self) -> &'static str {
        match self {
            NumberField::MaxPoints => "Max points",
            NumberField::HandCards => "Hand cards",
        }
    }

    pub const fn bounds(self) -> RangeInclusive<u32> {
        match self {
            NumberField::MaxPoints => MIN_MAX_POINTS..=u32::MAX,
            NumberField::HandCards => MIN_HAND_CARDS..=MAX_HAND_CARDS,
        }
    }

    pub const fn default_value(self) -> u32 {
        match self {
            NumberField::MaxPoints => DEFAULT_MAX_POINTS,
            NumberField::HandCards => DEFAULT_HAND_CARDS,
        }
    }

    /// Clamp an arbitrary input into this field's bounds.
    pub fn clamp(self, value: i64) -> u32 {
        let bounds = self.bounds();
        let clamped = value.clamp(i64::from(*bounds.start()), i64::from(*bounds.end()));
        // In range by construction.
        clamped as u32
    }

    /// Describe this field for registration with the configuration UI.
    pub fn input(self, value: u32) -> NumberInput {
        let bounds = self.bounds();
        NumberInput {
            field: self,
            label: self.label(),
            min: *bounds.start(),
            max: *bounds.end(),
            default: self.default_value(),
            value,
        }
    }
}

/// A numeric input as presented to the configuration UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberInput {
    pub field: NumberField,
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub default: u32,
    pub value: u32,
}

/// White cards that must be available before the game can start.
///
/// Quiplash mode drops the full-hand requirement; Rando always needs one card.
pub fn required_white_cards(flags: RuleFlags, players: usize, hand_cards: u32) -> usize {
    let hands = if flags.is_enabled(Rule::Quiplash) {
        0
    } else {
        players.saturating_mul(hand_cards as usize)
    };
    let rando = usize::from(flags.is_enabled(Rule::Rando));
    hands.saturating_add(rando)
}
