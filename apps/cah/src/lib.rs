#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod ports;
pub mod services;

// Re-exports for public API
pub use catalog::{CatalogError, PackCatalog};
pub use config::{ConfigError, LobbyConfig};
pub use domain::{CahState, Pack, PlayerId, PlayerState, RandShuffler, Rule, Shuffler};
pub use error::{SessionError, SetupError, UiError};
pub use errors::ErrorCode;
pub use ports::{ConfigUi, ControlId, GameSession, Interaction, PlayerBounds, Reply};
pub use services::setup::{run_setup, LobbyAction, LobbyEvent, SetupController, SetupView};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    cah_test_support::logging::init();
}
