//! Configuration of a [`MinHashDetector`](crate::MinHashDetector).
use minwise::{MAX_SHINGLE_ID, NUM_HASHES};
use serde::{Deserialize, Serialize};

use crate::errors::{PostdupError, Result};
use crate::feature::{FeatureConfig, DELIMITER, WINDOW_SIZE};
use crate::SIMILARITY_THRESHOLD;

/// Settings for shingling, coefficient generation, and the similarity verdict.
///
/// Every field has a default, so a partial serialized form is accepted:
///
/// ```
/// let config: postdup::DetectorConfig = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
/// assert_eq!(config.num_hashes(), 20);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    window_size: usize,
    delimiter: char,
    num_hashes: usize,
    max_coefficient: u64,
    similarity_threshold: f64,
    seed: Option<u64>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            delimiter: DELIMITER,
            num_hashes: NUM_HASHES,
            max_coefficient: MAX_SHINGLE_ID,
            similarity_threshold: SIMILARITY_THRESHOLD,
            seed: None,
        }
    }
}

impl DetectorConfig {
    /// Sets the number of tokens in a shingle.
    pub const fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Sets the token delimiter.
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the number of hash functions, i.e., the signature length.
    pub const fn with_num_hashes(mut self, num_hashes: usize) -> Self {
        self.num_hashes = num_hashes;
        self
    }

    /// Sets the exclusive upper bound of the random coefficients.
    pub const fn with_max_coefficient(mut self, max_coefficient: u64) -> Self {
        self.max_coefficient = max_coefficient;
        self
    }

    /// Sets the estimated similarity above which documents are duplicates.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Fixes the seed of the coefficients. Without a seed one is drawn at random.
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Gets the number of tokens in a shingle.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Gets the token delimiter.
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Gets the number of hash functions.
    pub const fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Gets the exclusive upper bound of the random coefficients.
    pub const fn max_coefficient(&self) -> u64 {
        self.max_coefficient
    }

    /// Gets the similarity threshold.
    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    /// Gets the seed, if fixed.
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Builds the feature-extraction part of the configuration.
    pub fn feature_config(&self) -> Result<FeatureConfig> {
        FeatureConfig::new(self.window_size, self.delimiter)
    }

    /// Checks every setting, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        self.feature_config()?;
        if self.num_hashes == 0 {
            return Err(PostdupError::input("Number of hash functions must not be 0."));
        }
        if self.max_coefficient < self.num_hashes as u64 {
            return Err(PostdupError::input(format!(
                "Coefficient bound {} is below the number of hash functions {}.",
                self.max_coefficient, self.num_hashes
            )));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(PostdupError::input("Threshold must be in [0, 1]."));
        }
        Ok(())
    }
}
