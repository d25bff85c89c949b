//! Deck assembly and start-readiness checks.

use crate::domain::errors::StartRejection;
use crate::domain::pack::Pack;
use crate::domain::rules::{required_white_cards, RuleFlags};

/// Unshuffled card pools built from the selected packs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decks {
    pub white: Vec<String>,
    pub black: Vec<String>,
}

/// Concatenate the cards of `packs`, keeping pack order and card order.
pub fn assemble_decks<'a>(packs: impl IntoIterator<Item = &'a Pack>) -> Decks {
    let mut decks = Decks::default();
    for pack in packs {
        decks.white.extend(pack.cards.white.iter().cloned());
        decks.black.extend(pack.cards.black.iter().cloned());
    }
    decks
}

/// Check that `decks` can support a game with the given settings.
///
/// Black cards are checked first; an empty black deck is rejected no matter
/// how many white cards there are.
pub fn validate_decks(
    decks: &Decks,
    flags: RuleFlags,
    players: usize,
    hand_cards: u32,
) -> Result<(), StartRejection> {
    if decks.black.is_empty() {
        return Err(StartRejection::NoBlackCards);
    }

    let required = required_white_cards(flags, players, hand_cards);
    if decks.white.len() < required {
        return Err(StartRejection::NotEnoughWhiteCards {
            required,
            available: decks.white.len(),
        });
    }

    Ok(())
}
