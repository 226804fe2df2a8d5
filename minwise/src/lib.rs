//! Min-wise hashing primitives for estimating the Jaccard similarity of shingle sets.
//!
//! A document is reduced to a [`ShingleSet`] of 32-bit identifiers, and a [`MinHasher`]
//! turns it into a fixed-length [`Signature`] using the affine hash family
//! `(a * x + b) mod P` with `P` the smallest prime above `2^32 - 1`.
//! The fraction of positions at which two signatures agree estimates the Jaccard index
//! of the underlying sets.
#![deny(missing_docs)]

pub mod coefficients;
pub mod errors;
pub mod minhash;
pub mod shingles;
pub mod signature;

use std::hash::Hash;

use hashbrown::HashSet;

pub use coefficients::Coefficients;
pub use errors::{MinwiseError, Result};
pub use minhash::MinHasher;
pub use shingles::{Shingle, ShingleSet};
pub use signature::Signature;

/// Largest shingle identifier, `2^32 - 1`.
pub const MAX_SHINGLE_ID: u64 = 4_294_967_295;

/// Smallest prime greater than [`MAX_SHINGLE_ID`], the modulus of the hash family.
pub const NEXT_PRIME: u64 = 4_294_967_311;

/// Default number of hash functions, giving 5% granularity.
pub const NUM_HASHES: usize = 20;

/// Signature component left in place when a shingle set is empty.
/// Strictly greater than any value the hash family can produce.
pub const SENTINEL: i64 = NEXT_PRIME as i64 + 1;

/// Hashes a string into a 32-bit identifier with CRC-32 (IEEE).
///
/// The result depends only on the bytes of `s`, so it is stable across processes.
#[inline(always)]
pub fn hash_str(s: &str) -> u32 {
    crc32fast::hash(s.as_bytes())
}

/// Computes the exact Jaccard index of two collections, ignoring duplicates.
///
/// Two empty collections are defined to be identical and score `1.0`.
pub fn jaccard_similarity<I, T>(lhs: I, rhs: I) -> f64
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    let a = HashSet::<T>::from_iter(lhs);
    let b = HashSet::<T>::from_iter(rhs);
    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        tracing::trace!("jaccard of two empty sets, scoring 1.0");
        return 1.;
    }
    intersection as f64 / union as f64
}
