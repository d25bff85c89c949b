//! Builders for lobby fixtures.

use cah::{CahState, Interaction, LobbyAction, LobbyEvent, Pack, PackCatalog};

pub fn numbered(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix} {i}")).collect()
}

/// Catalog of `(name, white, black)` packs with generated card text.
pub fn catalog_of(packs: &[(&str, usize, usize)]) -> PackCatalog {
    PackCatalog::new(packs.iter().map(|&(name, white, black)| {
        Pack::new(
            name,
            numbered(&format!("{name} white"), white),
            numbered(&format!("{name} black"), black),
        )
    }))
}

pub fn seated(users: &[u64]) -> CahState {
    let mut state = CahState::default();
    for &user in users {
        state.add_user(user);
    }
    state
}

pub fn event(id: u64, user: u64, action: LobbyAction) -> LobbyEvent {
    LobbyEvent::new(Interaction::new(id, user), action)
}
