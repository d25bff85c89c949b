//! Domain layer: lobby settings, packs and deck assembly. No I/O.

pub mod deck;
pub mod errors;
pub mod pack;
pub mod rules;
pub mod shuffle;
pub mod state;

#[cfg(test)]
mod tests_props_deck;

// Re-exports for ergonomics
pub use deck::{assemble_decks, validate_decks, Decks};
pub use errors::StartRejection;
pub use pack::{Pack, PackCards, PackChoice, PackSelection};
pub use rules::{required_white_cards, NumberField, NumberInput, Rule, RuleFlags};
pub use shuffle::{RandShuffler, Shuffler};
pub use state::{CahState, PlayerId, PlayerState, UserId};
