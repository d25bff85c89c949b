//! Collaborator interfaces consumed by the setup controller.

pub mod session;
pub mod ui;

pub use session::{GameSession, PlayerBounds};
pub use ui::{ConfigUi, ControlId, Interaction, Reply};
