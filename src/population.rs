//! Individuals and populations.
//!
//! A [`Population`] is one generation: an ordered, non-empty list of
//! [`Individual`]s whose identities equal their positions. It is immutable
//! once built; each generation produces a brand-new population.

use crate::error::{GaError, Result};
use crate::genome::Genome;

/// A genome with a positional identity within its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    id: usize,
    genome: Genome,
}

impl Individual {
    pub fn new(id: usize, genome: Genome) -> Self {
        Self { id, genome }
    }

    /// Position of this individual in the population that created it.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn into_genome(self) -> Genome {
        self.genome
    }
}

/// An ordered collection of individuals for one generation.
///
/// # Invariants
///
/// - at least one individual
/// - `individuals[i].id() == i`
/// - every genome has the same length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Builds a population from ready-made individuals.
    ///
    /// Fails if the list is empty, if an identity differs from its position,
    /// or if genome lengths differ.
    pub fn from_individuals(individuals: Vec<Individual>) -> Result<Self> {
        let first = individuals.first().ok_or(GaError::EmptyPopulation)?;
        let expected = first.genome.len();
        for (position, ind) in individuals.iter().enumerate() {
            if ind.id != position {
                return Err(GaError::IdentityMismatch {
                    position,
                    id: ind.id,
                });
            }
            if ind.genome.len() != expected {
                return Err(GaError::LengthMismatch {
                    expected,
                    actual: ind.genome.len(),
                });
            }
        }
        Ok(Self { individuals })
    }

    /// Builds a population from genomes, assigning identities `0..N-1` in
    /// iteration order.
    pub fn from_genomes<I>(genomes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Genome>,
    {
        let individuals = genomes
            .into_iter()
            .enumerate()
            .map(|(id, genome)| Individual::new(id, genome))
            .collect();
        Self::from_individuals(individuals)
    }

    /// Looks up an individual by identity.
    pub fn get(&self, id: usize) -> Result<&Individual> {
        self.individuals.get(id).ok_or(GaError::IndexOutOfRange {
            index: id,
            len: self.individuals.len(),
        })
    }

    /// Number of individuals. Always at least 1.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Length shared by every genome in the population.
    pub fn genome_length(&self) -> usize {
        self.individuals[0].genome.len()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn genomes(&self) -> impl Iterator<Item = &Genome> + '_ {
        self.individuals.iter().map(|ind| &ind.genome)
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
