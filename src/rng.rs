//! Randomness source for team generation.
//!
//! The generator never reaches for a global RNG: every random choice goes
//! through a caller-owned [`TeamRng`], so a fixed seed and catalog always
//! reproduce the same roster.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait TeamRng {
    /// Returns a uniformly random index in `0..len`. `len` is never zero.
    /// `reason` names the decision being made, for debugging.
    fn next_index(&mut self, len: usize, reason: &str) -> usize;

    /// Picks one element uniformly at random, leaving the slice untouched.
    fn pick<'a, T>(&mut self, items: &'a [T], reason: &str) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_index(items.len(), reason);
        items.get(index)
    }

    /// Removes and returns one element uniformly at random. The remaining
    /// elements keep their relative order.
    fn take<T>(&mut self, items: &mut Vec<T>, reason: &str) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_index(items.len(), reason);
        Some(items.remove(index))
    }
}

/// Standard seeded generator backed by `rand`'s `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }
}

impl TeamRng for SeededRng {
    fn next_index(&mut self, len: usize, _reason: &str) -> usize {
        self.inner.random_range(0..len)
    }
}

/// Replays a fixed list of outcomes, each reduced modulo the requested length.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    outcomes: Vec<usize>,
    index: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new_for_test(outcomes: Vec<usize>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Always picks the first remaining element.
    pub fn first_always() -> Self {
        Self::new_for_test(vec![0; 1000])
    }
}

#[cfg(test)]
impl TeamRng for ScriptedRng {
    fn next_index(&mut self, len: usize, reason: &str) -> usize {
        if self.index >= self.outcomes.len() {
            panic!(
                "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more outcomes.",
                reason
            );
        }
        let outcome = self.outcomes[self.index] % len;
        println!("[RNG] Consumed {} (of {}) for: {}", outcome, len, reason);
        self.index += 1;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_take_removes_without_reordering() {
        let mut rng = ScriptedRng::new_for_test(vec![1]);
        let mut items = vec!["a", "b", "c", "d"];

        assert_eq!(rng.take(&mut items, "test"), Some("b"));
        assert_eq!(items, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_pick_and_take_on_empty_do_not_consume() {
        // An empty script would panic if any outcome were consumed.
        let mut rng = ScriptedRng::new_for_test(Vec::new());
        let mut items: Vec<u8> = Vec::new();

        assert_eq!(rng.pick(items.as_slice(), "test"), None);
        assert_eq!(rng.take(&mut items, "test"), None);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = SeededRng::from_seed(42);
        let mut b = SeededRng::from_seed(42);
        let draws_a: Vec<usize> = (0..20).map(|_| a.next_index(17, "test")).collect();
        let draws_b: Vec<usize> = (0..20).map(|_| b.next_index(17, "test")).collect();

        assert_eq!(draws_a, draws_b);
        assert!(draws_a.iter().all(|&i| i < 17));
    }
}
