use thiserror::Error;

use crate::errors::ErrorCode;

/// Failure reported by a [`GameSession`](crate::ports::GameSession).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session closed")]
    Closed,
    #[error("lobby start failed: {detail}")]
    Start { detail: String },
}

/// Failure reported by a [`ConfigUi`](crate::ports::ConfigUi).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("interaction expired")]
    Expired,
    #[error("delivery failed: {detail}")]
    Delivery { detail: String },
}

impl UiError {
    pub fn delivery(detail: impl Into<String>) -> Self {
        Self::Delivery {
            detail: detail.into(),
        }
    }

    pub const fn code(&self) -> ErrorCode {
        ErrorCode::UiDeliveryFailed
    }
}

/// Errors that end `run_setup` without a started game.
///
/// Start rejections are not here: they are reported to the requester and the
/// lobby stays open.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("lobby closed before the game started")]
    LobbyClosed,
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl SetupError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            SetupError::LobbyClosed => ErrorCode::LobbyClosed,
            SetupError::Session(_) => ErrorCode::SessionStartFailed,
        }
    }
}
