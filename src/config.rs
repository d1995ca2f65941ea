//! Garden configuration.
//!
//! [`GardenConfig`] holds every parameter of a run. The two rates may be
//! changed on a live [`Garden`](crate::Garden) between generations.

use crate::error::{check_rate, GaError, Result};
use crate::operators::MIN_GENOME_LENGTH;
use crate::selection::SelectionScheme;

/// Configuration for a [`Garden`](crate::Garden).
///
/// # Defaults
///
/// ```
/// use bitgarden::GardenConfig;
///
/// let config = GardenConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.chromosome_length, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitgarden::{GardenConfig, SelectionScheme};
///
/// let config = GardenConfig::new(40, 16)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.01)
///     .with_selection(SelectionScheme::Continuous)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GardenConfig {
    /// Number of individuals per generation. Must be positive and even.
    pub population_size: usize,

    /// Number of bits per genome. Must be at least 3.
    pub chromosome_length: usize,

    /// Probability that a parent pair is recombined (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to every child (0.0–1.0).
    pub mutation_rate: f64,

    /// How parents are drawn from the fitness table.
    pub selection: SelectionScheme,

    /// Whether to evaluate fitness on the rayon pool.
    ///
    /// Only effective with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            chromosome_length: 20,
            crossover_rate: 0.7,
            mutation_rate: 0.02,
            selection: SelectionScheme::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GardenConfig {
    /// Default configuration with the given population size and genome
    /// length.
    pub fn new(population_size: usize, chromosome_length: usize) -> Self {
        Self {
            population_size,
            chromosome_length,
            ..Self::default()
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_selection(mut self, selection: SelectionScheme) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::EmptyPopulation);
        }
        if self.population_size % 2 != 0 {
            return Err(GaError::OddPopulation {
                size: self.population_size,
            });
        }
        if self.chromosome_length < MIN_GENOME_LENGTH {
            return Err(GaError::GenomeTooShort {
                length: self.chromosome_length,
            });
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}
