//! Exact Jaccard similarity over word windows.
use crate::errors::{PostdupError, Result};
use crate::feature::{FeatureConfig, ShingleExtractor};
use crate::wordset::WordSet;
use crate::SIMILARITY_THRESHOLD;

/// Exact Jaccard comparison of documents over their word windows.
#[derive(Clone, Copy, Debug)]
pub struct JaccardScorer {
    extractor: ShingleExtractor,
    threshold: f64,
}

impl Default for JaccardScorer {
    fn default() -> Self {
        Self {
            extractor: ShingleExtractor::default(),
            threshold: SIMILARITY_THRESHOLD,
        }
    }
}

impl JaccardScorer {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration of feature extraction.
    /// * `threshold` - Jaccard index at or above which documents are similar (in `[0, 1]`).
    pub fn new(config: FeatureConfig, threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PostdupError::input("Threshold must be in [0, 1]."));
        }
        Ok(Self {
            extractor: ShingleExtractor::new(config),
            threshold,
        })
    }

    /// Computes the Jaccard index of the word windows of two documents.
    pub fn similarity<L, R>(&self, left: L, right: R) -> f64
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        let l = self.extractor.word_set(left);
        let r = self.extractor.word_set(right);
        jaccard_index(&l, &r)
    }

    /// Checks if two documents reach the threshold.
    pub fn similar<L, R>(&self, left: L, right: R) -> bool
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        self.similarity(left, right) >= self.threshold
    }

    /// Gets the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Computes `|L ∩ R| / (|L| + |R| - |L ∩ R|)`.
///
/// Two empty sets are defined to be identical and score `1.0`.
pub fn jaccard_index(left: &WordSet, right: &WordSet) -> f64 {
    let intersection = left.intersection(right);
    let union = left.len() + right.len() - intersection;
    if union == 0 {
        tracing::trace!("jaccard of two empty word sets, scoring 1.0");
        return 1.;
    }
    intersection as f64 / union as f64
}

/// Checks if two word sets reach [`SIMILARITY_THRESHOLD`].
pub fn similar_word_sets(left: &WordSet, right: &WordSet) -> bool {
    jaccard_index(left, right) >= SIMILARITY_THRESHOLD
}

/// Computes the Jaccard index of two documents over their 3-token windows.
pub fn jaccard_similarity<L, R>(left: L, right: R) -> f64
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    JaccardScorer::default().similarity(left, right)
}

/// Checks if two documents share at least [`SIMILARITY_THRESHOLD`] of their 3-token windows.
pub fn similar<L, R>(left: L, right: R) -> bool
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    JaccardScorer::default().similar(left, right)
}
