#![allow(dead_code)]

pub mod fakes;
pub mod lobby;

pub use fakes::{FakeSession, FakeUi, ReversingShuffler};
pub use lobby::{catalog_of, event, numbered, seated};
