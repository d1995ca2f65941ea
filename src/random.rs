//! Seedable random sources.
//!
//! All stochastic operations take an explicit `&mut impl Rng`. These helpers
//! build the default generator used by [`Garden`](crate::Garden).

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_rng_from_seed_some() {
        let mut a = rng_from_seed(Some(99));
        let mut b = create_rng(99);
        assert_eq!(a.random::<u32>(), b.random::<u32>());
    }
}
