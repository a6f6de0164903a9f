use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::cell::RefCell;

/// Source of random test data.
///
/// Uses the xoshiro256** PRNG, so a fixed seed replays the same sequence.
///
/// # Examples
///
/// ```
/// use forest_maps_util::fuzzer::Fuzzer;
///
/// let fuzzer = Fuzzer::from_u64(7);
/// let n = fuzzer.random_int(1, 10);
/// assert!(n >= 1 && n <= 10);
///
/// let keys = fuzzer.shuffled(0..5);
/// assert_eq!(keys.len(), 5);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: RefCell<Xoshiro256StarStar>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: RefCell::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    /// Seeded fuzzer from a short numeric seed, convenient in test names
    /// and failure messages.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng.borrow_mut().gen_range(min..=max)
    }

    /// Random index in `[0, len)`.
    pub fn random_index(&self, len: usize) -> usize {
        self.rng.borrow_mut().gen_range(0..len)
    }

    /// `true` with the given probability.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng.borrow_mut().gen_bool(probability)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        &elements[self.random_index(elements.len())]
    }

    /// Collects `items` in a random order.
    pub fn shuffled<T, I: IntoIterator<Item = T>>(&self, items: I) -> Vec<T> {
        let mut items: Vec<T> = items.into_iter().collect();
        items.shuffle(&mut *self.rng.borrow_mut());
        items
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut() -> T,
    {
        (0..times).map(|_| callback()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzer_random_int() {
        let fuzzer = Fuzzer::new(None);

        for _ in 0..100 {
            let n = fuzzer.random_int(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_fuzzer_pick() {
        let fuzzer = Fuzzer::new(None);
        let choices = vec!["a", "b", "c"];

        for _ in 0..100 {
            let picked = fuzzer.pick(&choices);
            assert!(choices.contains(picked));
        }
    }

    #[test]
    fn test_fuzzer_reproducible() {
        let fuzzer1 = Fuzzer::from_u64(42);
        let fuzzer2 = Fuzzer::from_u64(42);

        for _ in 0..10 {
            assert_eq!(fuzzer1.random_int(0, 1000), fuzzer2.random_int(0, 1000));
        }
        assert_eq!(fuzzer1.shuffled(0..20), fuzzer2.shuffled(0..20));
    }

    #[test]
    fn test_fuzzer_shuffled_is_permutation() {
        let fuzzer = Fuzzer::from_u64(3);
        let mut keys = fuzzer.shuffled(0..50);
        keys.sort_unstable();
        assert_eq!(keys, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_fuzzer_random_bool_extremes() {
        let fuzzer = Fuzzer::new(None);
        assert!(fuzzer.random_bool(1.0));
        assert!(!fuzzer.random_bool(0.0));
    }
}
