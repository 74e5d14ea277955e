//! Deterministic random number generation for session setup.
//!
//! The engine itself is fully deterministic; randomness only decides who
//! opens each game. Seeding makes whole sessions reproducible.
//!
//! ```
//! use rust_minimax::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.first_player(), b.first_player());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::PlayerId;

/// Seeded RNG used by the session driver.
///
/// Uses ChaCha8 so a given seed yields the same sequence on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Fair coin flip deciding who moves first.
    pub fn first_player(&mut self) -> PlayerId {
        if self.gen_bool(0.5) {
            PlayerId::Human
        } else {
            PlayerId::Computer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.first_player(), rng2.first_player());
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(7).seed(), 7);
    }

    #[test]
    fn test_coin_flip_hits_both_players() {
        let mut rng = GameRng::new(1);
        let flips: Vec<_> = (0..64).map(|_| rng.first_player()).collect();

        assert!(flips.contains(&PlayerId::Human));
        assert!(flips.contains(&PlayerId::Computer));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.first_player()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.first_player()).collect();

        assert_ne!(seq1, seq2);
    }
}
