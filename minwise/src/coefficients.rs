//! Coefficients of the affine hash family.
use hashbrown::HashSet;
use rand::Rng;
use rand_xoshiro::rand_core::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::errors::{MinwiseError, Result};

/// Pairs `(a, b)` defining the hash functions `(a * x + b) mod P`.
///
/// Every signature that is to be compared with another must be computed
/// from the same coefficients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CoefficientParts", into = "CoefficientParts")]
pub struct Coefficients {
    a: Vec<u64>,
    b: Vec<u64>,
}

impl Coefficients {
    /// Draws `num_hashes` coefficient pairs uniformly from `[0, max_value)`.
    ///
    /// Both sequences come from one generator seeded with `seed`, `a` first.
    ///
    /// # Arguments
    ///
    /// * `num_hashes` - Number of hash functions (must be more than 0).
    /// * `max_value` - Exclusive upper bound of the coefficients (must be at least `num_hashes`).
    /// * `seed` - Seed value for random values.
    pub fn generate(num_hashes: usize, max_value: u64, seed: u64) -> Result<Self> {
        let mut rng = rand_xoshiro::SplitMix64::seed_from_u64(seed);
        let a = generate_distinct(&mut rng, num_hashes, max_value)?;
        let b = generate_distinct(&mut rng, num_hashes, max_value)?;
        tracing::debug!(num_hashes, max_value, seed, "generated minhash coefficients");
        Ok(Self { a, b })
    }

    /// Builds coefficients from fixed sequences.
    ///
    /// Both sequences must be non-empty, of equal length, and free of duplicates.
    pub fn from_parts(a: Vec<u64>, b: Vec<u64>) -> Result<Self> {
        if a.is_empty() {
            return Err(MinwiseError::input("Coefficients must not be empty."));
        }
        if a.len() != b.len() {
            return Err(MinwiseError::input(format!(
                "Coefficient sequences differ in length: {} vs {}.",
                a.len(),
                b.len()
            )));
        }
        if !all_distinct(&a) || !all_distinct(&b) {
            return Err(MinwiseError::input(
                "Coefficient sequences must not contain duplicates.",
            ));
        }
        Ok(Self { a, b })
    }

    /// Gets the number of hash functions.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Always `false` for validated coefficients.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Gets the multiplicative coefficients.
    pub fn a(&self) -> &[u64] {
        &self.a
    }

    /// Gets the additive coefficients.
    pub fn b(&self) -> &[u64] {
        &self.b
    }

    /// Iterates the `(a, b)` pairs in hash-function order.
    pub fn pairs(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.a.iter().copied().zip(self.b.iter().copied())
    }
}

#[derive(Serialize, Deserialize)]
struct CoefficientParts {
    a: Vec<u64>,
    b: Vec<u64>,
}

impl TryFrom<CoefficientParts> for Coefficients {
    type Error = MinwiseError;

    fn try_from(parts: CoefficientParts) -> Result<Self> {
        Self::from_parts(parts.a, parts.b)
    }
}

impl From<Coefficients> for CoefficientParts {
    fn from(coeffs: Coefficients) -> Self {
        Self {
            a: coeffs.a,
            b: coeffs.b,
        }
    }
}

/// Draws `k` pairwise-distinct integers uniformly from `[0, max_value)`.
///
/// Values already drawn are rejected and re-drawn.
pub fn generate_distinct<R>(rng: &mut R, k: usize, max_value: u64) -> Result<Vec<u64>>
where
    R: Rng,
{
    if k == 0 {
        return Err(MinwiseError::input("Number of hash functions must not be 0."));
    }
    if max_value < k as u64 {
        return Err(MinwiseError::input(format!(
            "Cannot draw {k} distinct values below {max_value}."
        )));
    }
    let mut seen = HashSet::with_capacity(k);
    let mut values = Vec::with_capacity(k);
    while values.len() < k {
        let x = rng.gen_range(0..max_value);
        if seen.insert(x) {
            values.push(x);
        }
    }
    Ok(values)
}

fn all_distinct(xs: &[u64]) -> bool {
    let mut seen = HashSet::with_capacity(xs.len());
    xs.iter().all(|x| seen.insert(*x))
}
