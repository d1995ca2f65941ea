//! Genetic algorithm engine for fixed-length bitstrings.
//!
//! Evolves a population of boolean genomes against a caller-supplied
//! fitness function using fitness-proportionate (roulette-wheel) selection,
//! single-point crossover and per-bit mutation. Each generation fully
//! replaces the previous one; there is no elitism.
//!
//! # Core Types
//!
//! - [`Genome`]: fixed-length ordered bit sequence
//! - [`Individual`] / [`Population`]: one generation, indexed by identity
//! - [`FitnessFunction`]: the caller's pure `Genome -> f64` oracle
//! - [`Selection`]: fitness table, statistics and the sampled parent pool
//! - [`Breeder`]: crossover and mutation of pairs and whole populations
//! - [`Garden`]: owns the live population and runs the generational loop
//! - [`GardenConfig`]: run parameters
//!
//! # Example
//!
//! ```
//! use bitgarden::{Garden, GardenConfig, Genome};
//!
//! // count adjacent bits that differ; 8 bits => optimum 7
//! let transitions = |g: &Genome| g.bits().windows(2).filter(|w| w[0] != w[1]).count() as f64;
//!
//! let config = GardenConfig::new(20, 8)
//!     .with_crossover_rate(0.7)
//!     .with_mutation_rate(0.02)
//!     .with_seed(42);
//! let mut garden = Garden::new(transitions, config).unwrap();
//!
//! let outcome = garden.run_until(7.0, 500).unwrap();
//! assert!(outcome.max_fitness <= 7.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate fitness on the rayon thread pool
//! - `serde`: `Serialize`/`Deserialize` for genomes, configuration and
//!   statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod breeder;
mod config;
mod error;
mod garden;
mod genome;
pub mod operators;
mod population;
pub mod random;
pub mod selection;
mod types;

pub use breeder::Breeder;
pub use config::GardenConfig;
pub use error::{FitnessError, GaError, Result};
pub use garden::{Garden, GenerationStats, RunOutcome};
pub use genome::Genome;
pub use population::{Individual, Population};
pub use selection::{Selection, SelectionScheme};
pub use types::{FitnessFunction, TryFitness};
