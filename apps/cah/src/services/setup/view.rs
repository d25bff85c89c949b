use crate::domain::{CahState, PackSelection, Rule};

pub const GAME_TITLE: &str = "Cards Against Humanity";
pub const GAME_COLOR: u32 = 0x000000;

const NONE: &str = "*None.*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Configuration view derived from the current lobby state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupView {
    pub title: String,
    pub color: u32,
    pub fields: Vec<Field>,
}

impl SetupView {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

fn lines_or_none(lines: Vec<String>) -> String {
    if lines.is_empty() {
        NONE.to_string()
    } else {
        lines.join("\n")
    }
}

pub fn render_view(packs: &PackSelection, state: &CahState) -> SetupView {
    let players = state.players.keys().map(ToString::to_string).collect();
    let selected = packs.selected().map(|p| p.name.clone()).collect();
    let rules = Rule::ALL
        .iter()
        .filter(|&&rule| state.flags.is_enabled(rule))
        .map(|rule| rule.label().to_string())
        .collect();

    SetupView {
        title: GAME_TITLE.to_string(),
        color: GAME_COLOR,
        fields: vec![
            Field::new("Players", lines_or_none(players)),
            Field::new("Packs", lines_or_none(selected)),
            Field::new("Rules", lines_or_none(rules)),
            Field::new("Max points", state.max_points().to_string()),
            Field::new("Hand cards", state.hand_cards().to_string()),
        ],
    }
}
