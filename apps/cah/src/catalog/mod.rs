//! Pack catalog: base packs plus an origin-gated bonus pack.

pub mod loader;

use std::iter;
use std::sync::Arc;

use tracing::debug;

pub use loader::{load_bonus_pack, load_catalog, load_pack, parse_pack, CatalogError};

use crate::config::LobbyConfig;
use crate::domain::Pack;

/// Bonus pack unlocked for a single origin (e.g. one community/guild).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusPack {
    pub pack: Arc<Pack>,
    pub origin: String,
    /// Copies appended to the candidate list when unlocked.
    pub copies: usize,
}

/// Immutable pack catalog, resolved once at process start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackCatalog {
    base: Vec<Arc<Pack>>,
    bonus: Option<BonusPack>,
}

impl PackCatalog {
    pub fn new(base: impl IntoIterator<Item = Pack>) -> Self {
        Self {
            base: base.into_iter().map(Arc::new).collect(),
            bonus: None,
        }
    }

    /// Attach a bonus pack. Without both content and an origin it stays locked.
    pub fn with_bonus(mut self, pack: Option<Pack>, origin: Option<String>, copies: usize) -> Self {
        self.bonus = match (pack, origin) {
            (Some(pack), Some(origin)) => Some(BonusPack {
                pack: Arc::new(pack),
                origin,
                copies,
            }),
            _ => None,
        };
        self
    }

    /// Load base packs (required) and the bonus pack (best-effort).
    pub fn load(config: &LobbyConfig) -> Result<Self, CatalogError> {
        let base = load_catalog(&config.packs_dir)?;
        let bonus = load_bonus_pack(config.bonus_pack.as_deref());
        Ok(Self::new(base).with_bonus(bonus, config.bonus_origin.clone(), config.bonus_copies))
    }

    pub fn base(&self) -> &[Arc<Pack>] {
        &self.base
    }

    pub fn bonus(&self) -> Option<&BonusPack> {
        self.bonus.as_ref()
    }

    /// Candidate packs for a lobby opened from `origin`.
    ///
    /// The bonus pack is appended `copies` times when its origin matches.
    pub fn candidates(&self, origin: Option<&str>) -> Vec<Arc<Pack>> {
        let mut packs = self.base.clone();
        if let Some(bonus) = self.unlocked_bonus(origin) {
            debug!(pack = %bonus.pack.name, copies = bonus.copies, "bonus pack unlocked");
            packs.extend(iter::repeat_n(Arc::clone(&bonus.pack), bonus.copies));
        }
        packs
    }

    fn unlocked_bonus(&self, origin: Option<&str>) -> Option<&BonusPack> {
        let bonus = self.bonus.as_ref()?;
        (origin? == bonus.origin).then_some(bonus)
    }
}
