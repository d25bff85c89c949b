use async_trait::async_trait;

use crate::error::SessionError;
use crate::services::setup::SetupView;

/// Player-count bounds the session enforces on join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerBounds {
    pub min: usize,
    pub max: usize,
}

/// Generic multiplayer session hosting the lobby.
///
/// The session owns the roster and rejects joins outside [`PlayerBounds`];
/// accepted joins and leaves reach the controller as lobby events.
#[async_trait]
pub trait GameSession: Send {
    fn set_player_bounds(&mut self, bounds: PlayerBounds);

    /// Identifier of the community the lobby was opened from, if any.
    fn origin(&self) -> Option<&str>;

    /// Drop every interactive control registered for the lobby.
    fn reset_controls(&mut self);

    /// Close the lobby and move into play. Resolves once the transition is done.
    async fn start_lobby(&mut self, view: &SetupView) -> Result<(), SessionError>;
}
