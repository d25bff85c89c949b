pub mod setup;

pub use setup::{run_setup, Flow, LobbyAction, LobbyEvent, SetupController, SetupView, Step};
