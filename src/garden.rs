//! Generational loop.
//!
//! [`Garden`] owns the live population and drives
//! evaluate → select → breed → replace, one generation per
//! [`next_gen`](Garden::next_gen) call.

use crate::breeder::Breeder;
use crate::config::GardenConfig;
use crate::error::{check_rate, Result};
use crate::genome::Genome;
use crate::population::Population;
use crate::random::rng_from_seed;
use crate::selection::{self, SelectionScheme};
use crate::types::FitnessFunction;
use rand::rngs::StdRng;
use rand::Rng;

/// Statistics of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation counter after the step that produced these numbers.
    pub generation: usize,

    /// Mean fitness of the population that was evaluated.
    pub average_fitness: f64,

    /// Best fitness of the population that was evaluated.
    pub max_fitness: f64,
}

/// Result of [`Garden::run_until`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Number of `next_gen` calls made by this run.
    pub generations: usize,

    /// Whether the maximum fitness reached the target.
    pub reached_target: bool,

    /// Maximum fitness when the run stopped.
    pub max_fitness: f64,

    /// Statistics after every generation of this run.
    pub history: Vec<GenerationStats>,
}

/// A genetic algorithm over fixed-length bitstrings.
///
/// Construction performs genesis: `population_size` random genomes of
/// `chromosome_length` bits form generation 0. Each
/// [`next_gen`](Self::next_gen) evaluates the current population, records
/// its average and maximum fitness, breeds a full replacement population and
/// increments the generation counter. There is no elitism.
///
/// The random source is owned by the garden and threaded through every
/// stochastic operation, so a fixed seed reproduces a run exactly.
///
/// # Usage
///
/// ```
/// use bitgarden::{Garden, GardenConfig, Genome};
///
/// let config = GardenConfig::new(20, 8).with_seed(42);
/// let mut garden = Garden::new(|g: &Genome| g.count_ones() as f64, config).unwrap();
///
/// garden.next_gen().unwrap();
/// assert_eq!(garden.generation(), 1);
/// assert!(garden.max_fitness() <= 8.0);
/// ```
pub struct Garden<F, R = StdRng> {
    fitness: F,
    config: GardenConfig,
    rng: R,
    population: Population,
    generation: usize,
    average_fitness: f64,
    max_fitness: f64,
}

impl<F: FitnessFunction> Garden<F, StdRng> {
    /// Creates a garden seeded from `config.seed`.
    ///
    /// # Errors
    /// Any error of [`GardenConfig::validate`].
    pub fn new(fitness: F, config: GardenConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(fitness, config, rng)
    }
}

impl<F: FitnessFunction, R: Rng> Garden<F, R> {
    /// Creates a garden drawing from an explicit random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(fitness: F, config: GardenConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let population = genesis(&config, &mut rng)?;

        tracing::info!(
            population_size = config.population_size,
            chromosome_length = config.chromosome_length,
            seed = ?config.seed,
            "genesis"
        );

        Ok(Self {
            fitness,
            config,
            rng,
            population,
            generation: 0,
            average_fitness: 0.0,
            max_fitness: 0.0,
        })
    }

    /// Advances exactly one generation.
    ///
    /// Rates are read from the current configuration, so changes made with
    /// [`set_crossover_rate`](Self::set_crossover_rate) and
    /// [`set_mutation_rate`](Self::set_mutation_rate) apply from this call
    /// on. On error the population, counter and statistics are unchanged;
    /// the random stream has still advanced.
    ///
    /// # Errors
    /// - [`GaError::Fitness`](crate::GaError::Fitness) from the fitness function
    /// - [`GaError::NonFiniteFitness`](crate::GaError::NonFiniteFitness)
    /// - [`GaError::NoViableParents`](crate::GaError::NoViableParents) when
    ///   every roulette share is zero
    pub fn next_gen(&mut self) -> Result<()> {
        let breeder = Breeder::new(self.config.crossover_rate, self.config.mutation_rate)?;

        let selection = selection::evaluate(
            &self.population,
            &self.fitness,
            self.config.selection,
            self.config.parallel,
            &mut self.rng,
        )?;
        let next = breeder.breed_population(&self.population, selection.chosen(), &mut self.rng)?;

        self.average_fitness = selection.average_fitness();
        self.max_fitness = selection.max_fitness();
        self.population = next;
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            average = self.average_fitness,
            max = self.max_fitness,
            best = selection.best(),
            "generation complete"
        );
        Ok(())
    }

    /// Calls [`next_gen`](Self::next_gen) until the maximum fitness reaches
    /// `target` or `max_generations` steps have run.
    ///
    /// The check happens before each step, so a garden that already meets
    /// the target runs zero generations.
    pub fn run_until(&mut self, target: f64, max_generations: usize) -> Result<RunOutcome> {
        let mut history = Vec::new();

        while self.max_fitness < target && history.len() < max_generations {
            self.next_gen()?;
            history.push(self.stats());
        }

        let reached_target = self.max_fitness >= target;
        if reached_target {
            tracing::info!(
                generation = self.generation,
                max = self.max_fitness,
                "target fitness reached"
            );
        }

        Ok(RunOutcome {
            generations: history.len(),
            reached_target,
            max_fitness: self.max_fitness,
            history,
        })
    }
}

impl<F, R> Garden<F, R> {
    /// Sets the crossover rate used from the next generation on.
    pub fn set_crossover_rate(&mut self, rate: f64) -> Result<()> {
        check_rate("crossover_rate", rate)?;
        self.config.crossover_rate = rate;
        Ok(())
    }

    /// Sets the per-bit mutation rate used from the next generation on.
    pub fn set_mutation_rate(&mut self, rate: f64) -> Result<()> {
        check_rate("mutation_rate", rate)?;
        self.config.mutation_rate = rate;
        Ok(())
    }

    pub fn set_selection(&mut self, selection: SelectionScheme) {
        self.config.selection = selection;
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Mean fitness of the last evaluated population; 0 before the first
    /// generation.
    pub fn average_fitness(&self) -> f64 {
        self.average_fitness
    }

    /// Best fitness of the last evaluated population; 0 before the first
    /// generation.
    pub fn max_fitness(&self) -> f64 {
        self.max_fitness
    }

    pub fn stats(&self) -> GenerationStats {
        GenerationStats {
            generation: self.generation,
            average_fitness: self.average_fitness,
            max_fitness: self.max_fitness,
        }
    }

    /// The live population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn crossover_rate(&self) -> f64 {
        self.config.crossover_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.config.mutation_rate
    }
}

/// Generation 0: every bit independently Bernoulli(0.5).
fn genesis<R: Rng>(config: &GardenConfig, rng: &mut R) -> Result<Population> {
    let genomes: Vec<Genome> = (0..config.population_size)
        .map(|_| Genome::random(config.chromosome_length, rng))
        .collect();
    Population::from_genomes(genomes)
}

// ============================================================================
// Tests
// ============================================================================
