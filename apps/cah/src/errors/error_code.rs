//! Error codes for lobby setup.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and appear in logs next to the
//! human-readable message.

use core::fmt;

/// Centralized error codes for the setup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Start validation
    /// Selected packs contain no black cards
    NoBlackCards,
    /// Selected packs cannot fill every hand
    NotEnoughWhiteCards,

    // Collaborators
    /// Event stream ended before the game started
    LobbyClosed,
    /// Session rejected the lobby-start transition
    SessionStartFailed,
    /// Configuration UI could not deliver a reply
    UiDeliveryFailed,

    // Content and configuration
    /// Pack file could not be read
    PackIo,
    /// Pack file is not valid pack JSON
    PackParse,
    /// Catalog directory has no packs
    EmptyCatalog,
    /// Invalid environment configuration
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoBlackCards => "NO_BLACK_CARDS",
            Self::NotEnoughWhiteCards => "NOT_ENOUGH_WHITE_CARDS",

            Self::LobbyClosed => "LOBBY_CLOSED",
            Self::SessionStartFailed => "SESSION_START_FAILED",
            Self::UiDeliveryFailed => "UI_DELIVERY_FAILED",

            Self::PackIo => "PACK_IO",
            Self::PackParse => "PACK_PARSE",
            Self::EmptyCatalog => "EMPTY_CATALOG",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
