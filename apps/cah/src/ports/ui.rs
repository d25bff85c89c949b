use async_trait::async_trait;

use crate::domain::{NumberInput, UserId};
use crate::error::UiError;
use crate::services::setup::SetupView;

/// Interactive controls of the configuration view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Packs,
    Rules,
    MaxPoints,
    HandCards,
    Join,
    Leave,
    Start,
}

/// An incoming user interaction that replies are addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub id: u64,
    pub user: UserId,
}

impl Interaction {
    pub fn new(id: u64, user: UserId) -> Self {
        Self { id, user }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Replace the configuration view.
    View(SetupView),
    /// Message only the requester can see.
    Private(String),
}

/// Rendering and input capture for the lobby configuration.
#[async_trait]
pub trait ConfigUi: Send {
    fn register_multi_select(&mut self, control: ControlId, label: &str, options: &[(String, bool)]);

    fn register_flags(&mut self, control: ControlId, label: &str, options: &[(&'static str, bool)]);

    fn register_number(&mut self, control: ControlId, input: NumberInput);

    fn register_action(&mut self, control: ControlId, label: &str);

    fn disable(&mut self, controls: &[ControlId]);

    async fn send(&mut self, to: &Interaction, reply: Reply) -> Result<(), UiError>;
}
