//! Lobby configuration loaded from the environment.
//!
//! - `CAH_PACKS_DIR`: directory of base pack JSON files (default `cards`)
//! - `CAH_BONUS_PACK`: optional bonus pack file
//! - `CAH_BONUS_ORIGIN`: origin identifier that unlocks the bonus pack
//! - `CAH_BONUS_COPIES`: copies appended when unlocked (default 2)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::errors::ErrorCode;

pub const DEFAULT_PACKS_DIR: &str = "cards";
pub const DEFAULT_BONUS_COPIES: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidCount { var: &'static str, value: String },
}

impl ConfigError {
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::ConfigError
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyConfig {
    pub packs_dir: PathBuf,
    pub bonus_pack: Option<PathBuf>,
    /// `None` disables the bonus pack for every origin.
    pub bonus_origin: Option<String>,
    pub bonus_copies: usize,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            packs_dir: PathBuf::from(DEFAULT_PACKS_DIR),
            bonus_pack: None,
            bonus_origin: None,
            bonus_copies: DEFAULT_BONUS_COPIES,
        }
    }
}

impl LobbyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bonus_copies = match get("CAH_BONUS_COPIES") {
            None => DEFAULT_BONUS_COPIES,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ConfigError::InvalidCount {
                        var: "CAH_BONUS_COPIES",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            packs_dir: get("CAH_PACKS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PACKS_DIR)),
            bonus_pack: get("CAH_BONUS_PACK").map(PathBuf::from),
            bonus_origin: get("CAH_BONUS_ORIGIN"),
            bonus_copies,
        })
    }
}
