pub mod lobby;

pub use lobby::{ConfigError, LobbyConfig};
