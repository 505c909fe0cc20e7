use crate::rng::TeamRng;

/// Names still eligible to be drawn during one roster build.
///
/// Every draw removes its name for good, whether the caller keeps the
/// candidate or rejects it.
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    names: Vec<&'a str>,
}

impl<'a> CandidatePool<'a> {
    pub fn new(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|&n| n == name)
    }

    /// Draw one remaining name uniformly at random.
    pub fn draw(&mut self, rng: &mut impl TeamRng) -> Option<&'a str> {
        rng.take(&mut self.names, "candidate")
    }

    /// Remove `name` if it is still in the pool, returning it.
    pub fn take_named(&mut self, name: &str) -> Option<&'a str> {
        let index = self.names.iter().position(|&n| n == name)?;
        Some(self.names.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SeededRng};
    use std::collections::HashSet;

    #[test]
    fn test_draws_every_name_exactly_once() {
        let names = ["deg", "duck", "EV", "OM", "ant"];
        let mut pool = CandidatePool::new(names);
        let mut rng = SeededRng::from_seed(7);

        let mut seen = HashSet::new();
        while let Some(name) = pool.draw(&mut rng) {
            assert!(seen.insert(name), "{} drawn twice", name);
        }

        assert_eq!(seen.len(), names.len());
        assert!(pool.is_empty());
        assert_eq!(pool.draw(&mut rng), None);
    }

    #[test]
    fn test_take_named_removes_only_once() {
        let mut pool = CandidatePool::new(["deg", "duck"]);

        assert_eq!(pool.take_named("duck"), Some("duck"));
        assert_eq!(pool.take_named("duck"), None);
        assert!(!pool.contains("duck"));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_draw_uses_rng_index() {
        let mut pool = CandidatePool::new(["a", "b", "c"]);
        let mut rng = ScriptedRng::new_for_test(vec![2, 0]);

        assert_eq!(pool.draw(&mut rng), Some("c"));
        assert_eq!(pool.draw(&mut rng), Some("a"));
        assert_eq!(pool.len(), 1);
    }
}
