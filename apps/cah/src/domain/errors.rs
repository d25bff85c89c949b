use thiserror::Error;

use crate::errors::ErrorCode;

/// Why the lobby could not start. Shown privately to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartRejection {
    #[error("The selected packs don't have any black cards.")]
    NoBlackCards,
    #[error(
        "The selected packs don't have enough white cards for everyone to get a full hand \
         ({available} available, {required} needed)."
    )]
    NotEnoughWhiteCards { required: usize, available: usize },
}

impl StartRejection {
    pub const fn code(&self) -> ErrorCode {
        match self {
            StartRejection::NoBlackCards => ErrorCode::NoBlackCards,
            StartRejection::NotEnoughWhiteCards { .. } => ErrorCode::NotEnoughWhiteCards,
        }
    }
}
