use std::sync::Mutex;

/// Source of DNS transaction IDs.
///
/// Each resolver owns one. A fixed seed makes the sequence reproducible;
/// without one the generator is seeded from entropy.
#[derive(Debug)]
pub struct QueryIdGenerator {
    rng: Mutex<fastrand::Rng>,
}

impl QueryIdGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    pub fn from_config(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    pub fn next_id(&self) -> u16 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.u16(..)
    }
}

impl Default for QueryIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
