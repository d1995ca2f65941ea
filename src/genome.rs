//! Fixed-length boolean genomes.

use rand::Rng;
use std::fmt;

/// An ordered, fixed-length sequence of bits.
///
/// Genomes are immutable once built: crossover and mutation always produce
/// new values and never touch their parents.
///
/// # Examples
///
/// ```
/// use bitgarden::Genome;
///
/// let g = Genome::from(vec![true, false, true]);
/// assert_eq!(g.len(), 3);
/// assert_eq!(g.get(1), Some(false));
/// assert_eq!(g.to_string(), "101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Wraps an existing bit vector.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a genome of `length` bits, each independently Bernoulli(0.5).
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        (0..length).map(|_| rng.random_bool(0.5)).collect()
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// The bits as a slice.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Number of positions where this genome and `other` differ.
    ///
    /// Bits past the shorter genome are not compared.
    pub fn hamming_distance(&self, other: &Genome) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}

impl From<Vec<bool>> for Genome {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl FromIterator<bool> for Genome {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for Genome {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_length() {
        let mut rng = create_rng(42);
        for len in [0, 1, 3, 64] {
            assert_eq!(Genome::random(len, &mut rng).len(), len);
        }
    }

    #[test]
    fn test_random_is_roughly_balanced() {
        let mut rng = create_rng(42);
        let g = Genome::random(10_000, &mut rng);
        let ones = g.count_ones();
        assert!(
            (4_500..5_500).contains(&ones),
            "expected about half the bits set, got {ones}"
        );
    }

    #[test]
    fn test_display() {
        let g: Genome = [false, true, true, false].into_iter().collect();
        assert_eq!(g.to_string(), "0110");
    }

    #[test]
    fn test_hamming_distance() {
        let a = Genome::from(vec![true, true, false, false]);
        let b = Genome::from(vec![true, false, true, false]);
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(a.hamming_distance(&a), 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let g = Genome::from(vec![true]);
        assert_eq!(g.get(0), Some(true));
        assert_eq!(g.get(1), None);
        assert!(g[0]);
    }
}
