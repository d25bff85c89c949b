//! Uniform in-place shuffling of card decks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// In-place uniform random permutation of a deck.
pub trait Shuffler: Send {
    fn shuffle(&mut self, cards: &mut [String]);
}

/// [`Shuffler`] backed by `StdRng` (Fisher-Yates via `SliceRandom`).
///
/// Seeded instances are reproducible; unseeded ones draw from OS entropy.
pub struct RandShuffler {
    rng: StdRng,
}

impl RandShuffler {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Default for RandShuffler {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Shuffler for RandShuffler {
    fn shuffle(&mut self, cards: &mut [String]) {
        cards.shuffle(&mut self.rng);
    }
}
