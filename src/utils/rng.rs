use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Source of uniform samples in [0, 1) for the one stochastic term of the
/// flight model (stall roll jitter).
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Always returns the same sample. 0.5 yields zero jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(pub f64);

impl Default for FixedRandom {
    fn default() -> Self {
        Self(0.5)
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.clamp(0.0, 1.0)
    }
}

/// Hands out deterministic, per-component RNG streams from one master seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    /// Seed from the OS when the configuration does not pin one.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(rand::random::<u64>))
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    // Hash the component name with the master seed
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        name.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(source: &mut impl RandomSource, count: usize) -> Vec<f64> {
        (0..count).map(|_| source.next_unit()).collect()
    }

    #[test]
    fn test_rng_manager_consistency() {
        let rng_manager = RngManager::new(42);

        let first = sample(&mut rng_manager.get_rng("stall_jitter"), 5);
        let second = sample(&mut rng_manager.get_rng("stall_jitter"), 5);

        assert_eq!(
            first, second,
            "RNG sequences should be identical for same seed and component name"
        );
    }

    #[test]
    fn test_rng_manager_different_components() {
        let rng_manager = RngManager::new(42);

        let first = sample(&mut rng_manager.get_rng("component1"), 5);
        let second = sample(&mut rng_manager.get_rng("component2"), 5);

        assert_ne!(
            first, second,
            "Different components should get different RNG sequences"
        );
    }

    #[test]
    fn test_samples_stay_in_unit_interval() {
        let mut rng = RngManager::new(7).get_rng("stall_jitter");
        assert!(sample(&mut rng, 1000)
            .iter()
            .all(|u| (0.0..1.0).contains(u)));
    }

    #[test]
    fn test_fixed_random() {
        let mut fixed = FixedRandom(0.75);
        assert_eq!(sample(&mut fixed, 3), vec![0.75, 0.75, 0.75]);
        assert_eq!(FixedRandom(4.0).next_unit(), 1.0);
        assert_eq!(FixedRandom::default().next_unit(), 0.5);
    }
}
