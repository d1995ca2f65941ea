//! The fitness function contract.
//!
//! [`FitnessFunction`] is the seam between the generic engine and the
//! caller's problem. Plain closures `Fn(&Genome) -> f64` implement it
//! directly; fallible oracles are wrapped in [`TryFitness`].

use crate::error::FitnessError;
use crate::genome::Genome;

/// Scores a genome. Higher is better.
///
/// # Purity
///
/// Implementations must be pure: the same genome always yields the same
/// fitness, with no observable side effects. The engine may evaluate
/// individuals in any order, and in parallel when the `parallel` feature is
/// enabled, which is why the trait requires `Send + Sync`.
///
/// # Fitness values
///
/// Values must be finite. Fitness-proportionate selection treats negative
/// values as weight zero, so problems are usually expressed with
/// non-negative scores.
pub trait FitnessFunction: Send + Sync {
    /// Evaluates a genome.
    ///
    /// An error aborts the current generation and is returned to the caller
    /// unchanged inside [`GaError::Fitness`](crate::GaError::Fitness).
    fn evaluate(&self, genome: &Genome) -> Result<f64, FitnessError>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Genome) -> f64 + Send + Sync,
{
    fn evaluate(&self, genome: &Genome) -> Result<f64, FitnessError> {
        Ok(self(genome))
    }
}

/// Adapts a fallible closure into a [`FitnessFunction`].
///
/// ```
/// use bitgarden::{FitnessFunction, Genome, TryFitness};
///
/// let oracle = TryFitness(|g: &Genome| -> Result<f64, std::num::ParseIntError> {
///     let n: u32 = g.count_ones().to_string().parse()?;
///     Ok(n as f64)
/// });
/// let score = oracle.evaluate(&Genome::from(vec![true, true, false])).unwrap();
/// assert_eq!(score, 2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TryFitness<F>(pub F);

impl<F, E> FitnessFunction for TryFitness<F>
where
    F: Fn(&Genome) -> Result<f64, E> + Send + Sync,
    E: Into<FitnessError>,
{
    fn evaluate(&self, genome: &Genome) -> Result<f64, FitnessError> {
        (self.0)(genome).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("bad genome")]
    struct BadGenome;

    #[test]
    fn test_closure_is_fitness() {
        let ones = |g: &Genome| g.count_ones() as f64;
        let g = Genome::from(vec![true, false, true, true]);
        assert_eq!(ones.evaluate(&g).expect("infallible"), 3.0);
    }

    #[test]
    fn test_try_fitness_propagates() {
        let oracle = TryFitness(|g: &Genome| {
            if g.count_ones() == 0 {
                Err(BadGenome)
            } else {
                Ok(1.0)
            }
        });
        let err = oracle
            .evaluate(&Genome::from(vec![false, false]))
            .expect_err("all-zero genome fails");
        assert!(err.downcast_ref::<BadGenome>().is_some());
        assert_eq!(
            oracle.evaluate(&Genome::from(vec![true])).expect("ok"),
            1.0
        );
    }
}
