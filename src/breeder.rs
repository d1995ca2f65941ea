//! Pairwise and whole-population breeding.

use crate::error::{check_rate, GaError, Result};
use crate::genome::Genome;
use crate::operators::{bernoulli, crossover_at, mutate, random_split};
use crate::population::Population;
use rand::Rng;

/// Produces children from parents via single-point crossover and per-bit
/// mutation.
///
/// A breeder holds only its two rates; the random source is passed to every
/// call.
///
/// # Examples
///
/// ```
/// use bitgarden::{Breeder, Genome, random::create_rng};
///
/// let breeder = Breeder::new(1.0, 0.0).unwrap();
/// let mut rng = create_rng(42);
/// let p1 = Genome::from(vec![false; 8]);
/// let p2 = Genome::from(vec![true; 8]);
/// let (c0, c1) = breeder.breed(&p1, &p2, &mut rng).unwrap();
/// assert_eq!(c0.count_ones() + c1.count_ones(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breeder {
    crossover_rate: f64,
    mutation_rate: f64,
}

impl Breeder {
    /// Creates a breeder.
    ///
    /// # Errors
    /// [`GaError::InvalidRate`] if either rate is NaN or outside `[0, 1]`.
    pub fn new(crossover_rate: f64, mutation_rate: f64) -> Result<Self> {
        check_rate("crossover_rate", crossover_rate)?;
        check_rate("mutation_rate", mutation_rate)?;
        Ok(Self {
            crossover_rate,
            mutation_rate,
        })
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Recombines two parents without mutation.
    ///
    /// A split point is drawn from `[1, L-2]`, then crossover happens with
    /// probability `crossover_rate`. Without crossover the children are
    /// exact copies of the parents, in order.
    ///
    /// # Errors
    /// [`GaError::LengthMismatch`] for parents of different length,
    /// [`GaError::GenomeTooShort`] if `L < 3`.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        parent1: &Genome,
        parent2: &Genome,
        rng: &mut R,
    ) -> Result<(Genome, Genome)> {
        if parent1.len() != parent2.len() {
            return Err(GaError::LengthMismatch {
                expected: parent1.len(),
                actual: parent2.len(),
            });
        }
        let split = random_split(parent1.len(), rng)?;

        if bernoulli(self.crossover_rate, rng) {
            crossover_at(parent1, parent2, split)
        } else {
            Ok((parent1.clone(), parent2.clone()))
        }
    }

    /// Recombines two parents, then flips every bit of both children
    /// independently with probability `mutation_rate`.
    pub fn breed<R: Rng + ?Sized>(
        &self,
        parent1: &Genome,
        parent2: &Genome,
        rng: &mut R,
    ) -> Result<(Genome, Genome)> {
        let (child0, child1) = self.crossover(parent1, parent2, rng)?;
        if self.mutation_rate <= 0.0 {
            return Ok((child0, child1));
        }
        let child0 = mutate(&child0, self.mutation_rate, rng);
        let child1 = mutate(&child1, self.mutation_rate, rng);
        Ok((child0, child1))
    }

    /// Breeds the next generation from a parent pool.
    ///
    /// `chosen` holds one parent identity per slot of `population`.
    /// Consecutive entries are paired `(0, 1), (2, 3), …` and each pair
    /// contributes two children, so the result has the same size as the
    /// input with fresh identities `0..N-1`.
    ///
    /// # Errors
    /// - [`GaError::OddPopulation`] if the population size is odd
    /// - [`GaError::ParentPoolMismatch`] if `chosen.len()` differs from it
    /// - [`GaError::IndexOutOfRange`] for an unknown parent identity
    pub fn breed_population<R: Rng + ?Sized>(
        &self,
        population: &Population,
        chosen: &[usize],
        rng: &mut R,
    ) -> Result<Population> {
        let n = population.len();
        if n % 2 != 0 {
            return Err(GaError::OddPopulation { size: n });
        }
        if chosen.len() != n {
            return Err(GaError::ParentPoolMismatch {
                expected: n,
                actual: chosen.len(),
            });
        }

        let mut children = Vec::with_capacity(n);
        for pair in chosen.chunks_exact(2) {
            let p1 = population.get(pair[0])?;
            let p2 = population.get(pair[1])?;
            let (c0, c1) = self.breed(p1.genome(), p2.genome(), rng)?;
            children.push(c0);
            children.push(c1);
        }

        Population::from_genomes(children)
    }
}

/// Same rates as [`GardenConfig::default`](crate::GardenConfig).
impl Default for Breeder {
    fn default() -> Self {
        Self {
            crossover_rate: 0.7,
            mutation_rate: 0.02,
        }
    }
}
