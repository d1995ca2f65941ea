//! Bitstring crossover and mutation operators.
//!
//! These are the building blocks used by [`Breeder`](crate::Breeder). They
//! operate on [`Genome`]s and never modify their inputs.
//!
//! # Crossover
//!
//! - [`crossover_at`]: deterministic single-point exchange
//! - [`random_split`]: split point drawn uniformly from `[1, L-2]`
//!
//! # Mutation
//!
//! - [`mutate`]: independent per-bit flip with a fixed probability
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 3

use crate::error::{GaError, Result};
use crate::genome::Genome;
use rand::Rng;

/// Shortest genome that admits a split in `[1, L-2]`.
pub const MIN_GENOME_LENGTH: usize = 3;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover at a fixed `split`.
///
/// - child0 = `parent1[0, split)` followed by `parent2[split, L)`
/// - child1 = `parent2[0, split)` followed by `parent1[split, L)`
///
/// A `split` of 0 or `L` swaps or copies the parents whole.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the parents differ in length, and
/// [`GaError::IndexOutOfRange`] if `split > L`.
pub fn crossover_at(parent1: &Genome, parent2: &Genome, split: usize) -> Result<(Genome, Genome)> {
    let n = check_same_length(parent1, parent2)?;
    if split > n {
        return Err(GaError::IndexOutOfRange {
            index: split,
            len: n + 1,
        });
    }

    let (head1, tail1) = parent1.bits().split_at(split);
    let (head2, tail2) = parent2.bits().split_at(split);

    let child0 = head1.iter().chain(tail2).copied().collect();
    let child1 = head2.iter().chain(tail1).copied().collect();
    Ok((child0, child1))
}

/// Draws a split point uniformly from `[1, length - 2]`.
///
/// Both children of a crossover at this point carry at least one bit from
/// each parent.
///
/// # Errors
/// [`GaError::GenomeTooShort`] if `length < 3`.
pub fn random_split<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<usize> {
    if length < MIN_GENOME_LENGTH {
        return Err(GaError::GenomeTooShort { length });
    }
    Ok(rng.random_range(1..=length - 2))
}

// ============================================================================
// Mutation
// ============================================================================

/// Returns a copy of `genome` where every bit was flipped independently with
/// probability `rate`.
///
/// A rate of 0 returns an identical genome, a rate of 1 the complement.
/// `rate` is expected to lie in `[0, 1]`; callers validate it.
pub fn mutate<R: Rng + ?Sized>(genome: &Genome, rate: f64, rng: &mut R) -> Genome {
    genome
        .iter()
        .map(|bit| if bernoulli(rate, rng) { !bit } else { bit })
        .collect()
}

// ============================================================================
// Helpers
// ============================================================================

/// Bernoulli trial: `true` with probability `p`.
///
/// `p <= 0` never succeeds and `p >= 1` always does.
pub(crate) fn bernoulli<R: Rng + ?Sized>(p: f64, rng: &mut R) -> bool {
    rng.random_range(0.0..1.0) < p
}

fn check_same_length(parent1: &Genome, parent2: &Genome) -> Result<usize> {
    if parent1.len() != parent2.len() {
        return Err(GaError::LengthMismatch {
            expected: parent1.len(),
            actual: parent2.len(),
        });
    }
    Ok(parent1.len())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn genome(bits: &str) -> Genome {
        bits.chars().map(|c| c == '1').collect()
    }

    // ---- crossover_at ----

    #[test]
    fn test_crossover_at_exchanges_tails() {
        let p1 = genome("000000");
        let p2 = genome("111111");

        let (c0, c1) = crossover_at(&p1, &p2, 2).expect("same length");
        assert_eq!(c0, genome("001111"));
        assert_eq!(c1, genome("110000"));
    }

    #[test]
    fn test_crossover_at_every_split() {
        let p1 = genome("10110");
        let p2 = genome("01001");
        for split in 0..=5 {
            let (c0, c1) = crossover_at(&p1, &p2, split).expect("valid split");
            assert_eq!(c0.len(), 5);
            assert_eq!(c1.len(), 5);
            assert_eq!(&c0.bits()[..split], &p1.bits()[..split]);
            assert_eq!(&c0.bits()[split..], &p2.bits()[split..]);
            assert_eq!(&c1.bits()[..split], &p2.bits()[..split]);
            assert_eq!(&c1.bits()[split..], &p1.bits()[split..]);
        }
    }

    #[test]
    fn test_crossover_at_length_mismatch() {
        let result = crossover_at(&genome("0101"), &genome("010"), 1);
        assert!(matches!(
            result,
            Err(GaError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_crossover_at_split_past_end() {
        let result = crossover_at(&genome("010"), &genome("101"), 4);
        assert!(matches!(result, Err(GaError::IndexOutOfRange { index: 4, .. })));
    }

    // ---- random_split ----

    #[test]
    fn test_random_split_bounds() {
        let mut rng = create_rng(42);
        for length in 3..20 {
            for _ in 0..100 {
                let s = random_split(length, &mut rng).expect("long enough");
                assert!(
                    (1..=length - 2).contains(&s),
                    "split {s} outside [1, {}]",
                    length - 2
                );
            }
        }
    }

    #[test]
    fn test_random_split_length_three_is_one() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            assert_eq!(random_split(3, &mut rng).expect("valid"), 1);
        }
    }

    #[test]
    fn test_random_split_too_short() {
        let mut rng = create_rng(42);
        for length in 0..3 {
            assert!(matches!(
                random_split(length, &mut rng),
                Err(GaError::GenomeTooShort { .. })
            ));
        }
    }

    // ---- mutate ----

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let g = genome("1011001110");
        for _ in 0..500 {
            assert_eq!(mutate(&g, 0.0, &mut rng), g);
        }
    }

    #[test]
    fn test_mutate_rate_one_is_complement() {
        let mut rng = create_rng(42);
        let g = genome("1011001110");
        for _ in 0..50 {
            assert_eq!(mutate(&g, 1.0, &mut rng), genome("0100110001"));
        }
    }

    #[test]
    fn test_mutate_rate_is_per_bit() {
        let mut rng = create_rng(9);
        let g = Genome::from(vec![false; 10_000]);
        let flipped = mutate(&g, 0.1, &mut rng).count_ones();
        assert!(
            (800..1_200).contains(&flipped),
            "expected ~1000 flips, got {flipped}"
        );
    }

    #[test]
    fn test_mutate_leaves_input_untouched() {
        let mut rng = create_rng(42);
        let g = genome("0000");
        let _ = mutate(&g, 1.0, &mut rng);
        assert_eq!(g, genome("0000"));
    }
}
