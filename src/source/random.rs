//! Synthetic stats source.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{LoadContext, LoadError, StatsSource};
use crate::model::MemStats;

/// Process-wide generator, seeded from OS entropy on first use.
static RNG: Lazy<Mutex<StdRng>> = Lazy::new(|| Mutex::new(StdRng::from_entropy()));

/// Produces snapshots with a uniformly random GC CPU fraction in `[0, 1)`.
///
/// Useful for exercising the dashboard without a live process to observe.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSource;

impl RandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl StatsSource for RandomSource {
    fn load(&self, _ctx: &LoadContext) -> Result<MemStats, LoadError> {
        let fraction = RNG.lock().r#gen::<f64>();
        Ok(MemStats::with_gc_cpu_fraction(fraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_fails_and_stays_in_range() {
        let source = RandomSource::new();
        let ctx = LoadContext::background();
        for _ in 0..1000 {
            let stats = source.load(&ctx).unwrap();
            assert!((0.0..1.0).contains(&stats.gc_cpu_fraction));
        }
    }

    #[test]
    fn test_covers_the_unit_interval() {
        // 10k samples into 10 buckets; the chance of an empty bucket is negligible.
        let source = RandomSource::new();
        let ctx = LoadContext::background();
        let mut buckets = [0usize; 10];
        for _ in 0..10_000 {
            let f = source.load(&ctx).unwrap().gc_cpu_fraction;
            buckets[(f * 10.0) as usize] += 1;
        }
        assert!(buckets.iter().all(|&n| n > 0), "buckets: {buckets:?}");
    }

    #[test]
    fn test_ignores_expired_context() {
        let ctx = LoadContext::with_timeout(std::time::Duration::ZERO);
        assert!(RandomSource::new().load(&ctx).is_ok());
    }
}
