//! RNG module - injectable tile source
//!
//! Spawning needs exactly one random capability: "pick an index below `len`,
//! uniformly". [`TileSource`] names it so the rules never reach for ambient
//! randomness:
//!
//! - every [`rand::RngCore`] is a tile source (production, seeded replays)
//! - [`Scripted`] replays a fixed list of picks (deterministic tests)
//!
//! Use [`seeded`] for a reproducible game from a `u64` seed.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform picks for tile spawning
pub trait TileSource {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RngCore> TileSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Create a reproducible tile source from a seed
///
/// Same seed, same sequence of spawns, on every platform.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Tile source replaying a fixed list of picks
///
/// Each call consumes the next pick, cycling back to the start when the list
/// runs out. A pick larger than the requested range wraps (`pick % len`).
///
/// # Examples
///
/// ```
/// use tui_2048_core::rng::{Scripted, TileSource};
///
/// let mut source = Scripted::new([6, 0]);
/// assert_eq!(source.pick(7), 6);
/// assert_eq!(source.pick(3), 0);
/// assert_eq!(source.pick(4), 2); // cycled back to 6, wrapped into 0..4
/// ```
#[derive(Debug, Clone)]
pub struct Scripted {
    picks: Vec<usize>,
    cursor: usize,
}

impl Scripted {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        let picks: Vec<usize> = picks.into_iter().collect();
        Self {
            picks: if picks.is_empty() { vec![0] } else { picks },
            cursor: 0,
        }
    }

    /// Number of picks consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl TileSource for Scripted {
    fn pick(&mut self, len: usize) -> usize {
        let value = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        value % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_deterministic() {
        let mut a = seeded(12345);
        let mut b = seeded(12345);

        for _ in 0..100 {
            assert_eq!(a.pick(16), b.pick(16));
        }
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut rng = seeded(7);
        for len in 1..=20 {
            for _ in 0..50 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_pick_of_one_is_zero() {
        let mut rng = seeded(99);
        for _ in 0..10 {
            assert_eq!(rng.pick(1), 0);
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut source = Scripted::new([1, 2]);
        assert_eq!(source.pick(10), 1);
        assert_eq!(source.pick(10), 2);
        assert_eq!(source.pick(10), 1);
        assert_eq!(source.consumed(), 3);
    }

    #[test]
    fn test_scripted_empty_defaults_to_zero() {
        let mut source = Scripted::new(Vec::new());
        assert_eq!(source.pick(5), 0);
    }
}
