//! MinHash signatures and their text form.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{MinwiseError, Result};
use crate::SENTINEL;

/// Delimiter between components in the text form of a signature.
pub const DELIMITER: char = ' ';

/// A MinHash signature, the minimum code of each hash function in order.
///
/// The text form is the base-10 components joined by single spaces,
/// e.g. `"45884173 -4139326283 4896305"`. Negative components are accepted
/// and round-trip exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature(Vec<i64>);

impl Signature {
    /// Wraps raw components.
    pub const fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    /// Gets the components.
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// Gets the number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the signature has no components.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks if every component is the empty-set sentinel.
    pub fn is_degenerate(&self) -> bool {
        !self.is_empty() && self.0.iter().all(|&h| h == SENTINEL)
    }

    /// Counts the positions at which both signatures agree.
    pub fn matches(&self, other: &Self) -> Result<usize> {
        if self.len() != other.len() {
            return Err(MinwiseError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self
            .0
            .iter()
            .zip(other.0.iter())
            .filter(|(x, y)| x == y)
            .count())
    }

    /// Estimates the Jaccard index as the fraction of agreeing positions.
    ///
    /// Both signatures must come from the same hasher.
    pub fn similarity(&self, other: &Self) -> Result<f64> {
        let matches = self.matches(other)?;
        if self.is_empty() {
            return Err(MinwiseError::EmptySignature);
        }
        Ok(matches as f64 / self.len() as f64)
    }

    /// Converts into the raw components.
    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl From<Vec<i64>> for Signature {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl FromIterator<i64> for Signature {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[i64]> for Signature {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(h) = iter.next() {
            write!(f, "{h}")?;
            for h in iter {
                write!(f, "{DELIMITER}{h}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Signature {
    type Err = MinwiseError;

    /// Parses the text form. The first token that is not an `i64` aborts parsing.
    ///
    /// The empty string is the empty signature, the text form of [`Signature::default`].
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        s.split(DELIMITER)
            .enumerate()
            .map(|(position, token)| {
                token.parse::<i64>().map_err(|source| MinwiseError::Parse {
                    token: token.to_string(),
                    position,
                    source,
                })
            })
            .collect()
    }
}
