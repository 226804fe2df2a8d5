//! MinHash signatures over the affine hash family `(a * x + b) mod P`.
use crate::coefficients::Coefficients;
use crate::shingles::{Shingle, ShingleSet};
use crate::signature::Signature;
use crate::{NEXT_PRIME, SENTINEL};

/// Computes MinHash signatures with fixed coefficients.
///
/// One hasher must be shared by every document whose signatures are compared.
#[derive(Clone, Debug)]
pub struct MinHasher {
    coefficients: Coefficients,
}

impl MinHasher {
    /// Creates an instance from prepared coefficients.
    pub const fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    /// Gets the number of hash functions, i.e., the signature length.
    pub fn num_hashes(&self) -> usize {
        self.coefficients.len()
    }

    /// Gets the coefficients.
    pub const fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Iterates the minimum hash codes of `shingles`, one per hash function.
    pub fn iter<'a>(&'a self, shingles: &'a ShingleSet) -> MinHashIter<'a> {
        MinHashIter {
            shingles,
            pairs: self.coefficients.a().iter().zip(self.coefficients.b().iter()),
        }
    }

    /// Computes the signature of `shingles`.
    ///
    /// An empty set gives a signature filled with [`SENTINEL`].
    pub fn signature(&self, shingles: &ShingleSet) -> Signature {
        if shingles.is_empty() {
            tracing::trace!("empty shingle set, signature is all sentinel");
        }
        self.iter(shingles).collect()
    }
}

/// Iterator produced by [`MinHasher::iter`].
pub struct MinHashIter<'a> {
    shingles: &'a ShingleSet,
    pairs: std::iter::Zip<std::slice::Iter<'a, u64>, std::slice::Iter<'a, u64>>,
}

impl<'a> Iterator for MinHashIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let (&a, &b) = self.pairs.next()?;
        let h = self
            .shingles
            .iter()
            .map(|s| affine_hash(a, b, s))
            .min()
            .map_or(SENTINEL, |h| h as i64);
        Some(h)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl<'a> ExactSizeIterator for MinHashIter<'a> {}

/// Evaluates `(a * x + b) mod P` without overflow.
#[inline(always)]
pub fn affine_hash(a: u64, b: u64, x: Shingle) -> u64 {
    ((u128::from(a) * u128::from(x) + u128::from(b)) % u128::from(NEXT_PRIME)) as u64
}
