//! Fitness evaluation and roulette-wheel selection.
//!
//! [`evaluate`] scores a whole population, computes summary statistics and
//! draws the parent pool for the next generation. It is a pure function of
//! its inputs and the random stream; nothing survives the generation.
//!
//! # Selection schemes
//!
//! The default [`SelectionScheme::TruncatedShares`] gives every individual
//! an integer share `floor(fitness / average)` of a virtual wheel and then
//! samples wheel slots uniformly. Individuals below the average usually get
//! share 0 and cannot be chosen.
//!
//! [`SelectionScheme::Continuous`] is classic fitness-proportionate
//! selection: the probability of picking an individual is exactly its
//! fitness divided by the population total. It avoids the resolution loss of
//! the integer shares but selects differently; the two are not
//! interchangeable.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)

use crate::error::{GaError, Result};
use crate::population::Population;
use crate::types::FitnessFunction;
use rand::Rng;

/// How the roulette wheel is built from the fitness table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionScheme {
    /// Integer shares `floor(fitness / average)`, sampled uniformly over
    /// wheel slots.
    #[default]
    TruncatedShares,

    /// Weight `max(fitness, 0)`, one uniform draw over the cumulative
    /// distribution per parent.
    Continuous,
}

/// The outcome of evaluating one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    fitness: Vec<f64>,
    average: f64,
    max: f64,
    chosen: Vec<usize>,
}

impl Selection {
    /// Fitness of every individual, indexed by identity.
    pub fn fitness_table(&self) -> &[f64] {
        &self.fitness
    }

    /// Arithmetic mean of the fitness table.
    pub fn average_fitness(&self) -> f64 {
        self.average
    }

    /// Largest value in the fitness table.
    pub fn max_fitness(&self) -> f64 {
        self.max
    }

    /// Identities of the sampled parents, one per population slot.
    pub fn chosen(&self) -> &[usize] {
        &self.chosen
    }

    /// Identity of the fittest individual. Ties go to the lowest identity.
    pub fn best(&self) -> usize {
        self.fitness
            .iter()
            .enumerate()
            .fold(0, |best, (i, &f)| if f > self.fitness[best] { i } else { best })
    }
}

/// Scores `population`, computes its statistics and samples `N` parents.
///
/// With the `parallel` feature enabled and `parallel == true` the fitness
/// table is computed on the rayon pool. The random stream is only used for
/// the wheel draws, so both paths choose the same parents for the same seed.
///
/// # Errors
///
/// - [`GaError::Fitness`] if the fitness function fails
/// - [`GaError::NonFiniteFitness`] if it returns NaN or an infinity
/// - [`GaError::NoViableParents`] if the wheel is empty
pub fn evaluate<F, R>(
    population: &Population,
    fitness: &F,
    scheme: SelectionScheme,
    parallel: bool,
    rng: &mut R,
) -> Result<Selection>
where
    F: FitnessFunction + ?Sized,
    R: Rng + ?Sized,
{
    let table = fitness_table(population, fitness, parallel)?;
    let (average, max) = summarize(&table)?;
    let chosen = spin_wheel(&table, average, scheme, population.len(), rng)?;

    Ok(Selection {
        fitness: table,
        average,
        max,
        chosen,
    })
}

/// Evaluates every individual, in identity order.
pub fn fitness_table<F>(population: &Population, fitness: &F, parallel: bool) -> Result<Vec<f64>>
where
    F: FitnessFunction + ?Sized,
{
    let table = if parallel {
        evaluate_parallel(population, fitness)?
    } else {
        population
            .iter()
            .map(|ind| fitness.evaluate(ind.genome()))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(GaError::Fitness)?
    };

    if let Some((index, &value)) = table.iter().enumerate().find(|(_, f)| !f.is_finite()) {
        return Err(GaError::NonFiniteFitness { index, value });
    }
    Ok(table)
}

#[cfg(feature = "parallel")]
fn evaluate_parallel<F>(population: &Population, fitness: &F) -> Result<Vec<f64>>
where
    F: FitnessFunction + ?Sized,
{
    use rayon::prelude::*;

    population
        .individuals()
        .par_iter()
        .map(|ind| fitness.evaluate(ind.genome()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(GaError::Fitness)
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel<F>(population: &Population, fitness: &F) -> Result<Vec<f64>>
where
    F: FitnessFunction + ?Sized,
{
    tracing::trace!("parallel evaluation requested without the `parallel` feature");
    fitness_table(population, fitness, false)
}

/// Returns `(average, max)` of a fitness table.
///
/// When the plain sum overflows, the mean is taken over `f / N` terms
/// instead, so large finite tables still get a finite average.
///
/// # Errors
/// [`GaError::EmptyPopulation`] for an empty table,
/// [`GaError::NonFiniteFitness`] if no finite mean exists.
pub fn summarize(table: &[f64]) -> Result<(f64, f64)> {
    if table.is_empty() {
        return Err(GaError::EmptyPopulation);
    }
    let n = table.len() as f64;
    let max = table.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let sum: f64 = table.iter().sum();
    if sum.is_finite() {
        return Ok((sum / n, max));
    }

    let mut average = 0.0;
    for (index, &value) in table.iter().enumerate() {
        average += value / n;
        if !average.is_finite() {
            return Err(GaError::NonFiniteFitness { index, value });
        }
    }
    Ok((average, max))
}

/// Relative distance from an integer under which a quotient counts as that
/// integer. Absorbs the rounding of the mean, e.g. ten copies of `1/3`
/// average to one ulp above `1/3`.
const SHARE_TOLERANCE: f64 = 1e-9;

/// Integer wheel shares `floor(fitness / average)`.
///
/// Negative quotients become 0. An average that is not strictly positive
/// leaves every share at 0. Quotients within a relative `1e-9` of an
/// integer snap to it before truncation.
pub fn shares(table: &[f64], average: f64) -> Vec<u64> {
    if !(average > 0.0 && average.is_finite()) {
        return vec![0; table.len()];
    }
    table
        .iter()
        .map(|&f| {
            let share = truncate_share(f / average);
            if share > 0.0 {
                // `as` saturates at u64::MAX
                share as u64
            } else {
                0
            }
        })
        .collect()
}

fn truncate_share(quotient: f64) -> f64 {
    let nearest = quotient.round();
    if (quotient - nearest).abs() <= SHARE_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        quotient.floor()
    }
}

/// Draws `count` identities from the fitness table under `scheme`.
pub fn spin_wheel<R>(
    table: &[f64],
    average: f64,
    scheme: SelectionScheme,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>>
where
    R: Rng + ?Sized,
{
    match scheme {
        SelectionScheme::TruncatedShares => truncated_shares(table, average, count, rng),
        SelectionScheme::Continuous => continuous(table, count, rng),
    }
}

/// Uniform draws over a virtual wheel holding each identity `share` times.
///
/// The wheel is stored as cumulative share sums; a wheel slot maps to its
/// owner by binary search.
fn truncated_shares<R>(table: &[f64], average: f64, count: usize, rng: &mut R) -> Result<Vec<usize>>
where
    R: Rng + ?Sized,
{
    let mut cumulative = Vec::with_capacity(table.len());
    let mut total = 0u64;
    for share in shares(table, average) {
        total = total.saturating_add(share);
        cumulative.push(total);
    }

    if total == 0 {
        tracing::warn!(average, "roulette wheel is empty");
        return Err(GaError::NoViableParents);
    }
    tracing::trace!(wheel_size = total, "spinning truncated-share wheel");

    Ok((0..count)
        .map(|_| {
            let slot = rng.random_range(0..total);
            cumulative.partition_point(|&c| c <= slot)
        })
        .collect())
}

/// Classic fitness-proportionate draws over `max(fitness, 0)`.
fn continuous<R>(table: &[f64], count: usize, rng: &mut R) -> Result<Vec<usize>>
where
    R: Rng + ?Sized,
{
    let mut cumulative = Vec::with_capacity(table.len());
    let mut total = 0.0;
    for &f in table {
        total += f.max(0.0);
        cumulative.push(total);
    }

    if !(total > 0.0 && total.is_finite()) {
        tracing::warn!(total, "fitness-proportionate wheel has no weight");
        return Err(GaError::NoViableParents);
    }

    // The last positive-weight slot absorbs floating-point overshoot.
    let last = cumulative
        .iter()
        .rposition(|&c| c < total)
        .map_or(0, |i| i + 1);

    Ok((0..count)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            cumulative.partition_point(|&c| c <= threshold).min(last)
        })
        .collect())
}
