//! Approximate near-duplicate detection with MinHash signatures.
use minwise::{Coefficients, MinHasher, MinwiseError, Signature};
use rayon::prelude::*;

use crate::config::DetectorConfig;
use crate::errors::{PostdupError, Result};
use crate::feature::ShingleExtractor;

/// Detector of near-duplicate documents using MinHash signatures.
///
/// The coefficients are fixed when the detector is built, so every signature it
/// produces is comparable with every other. Build one detector and share it
/// (it is `Send + Sync`) rather than building one per document.
#[derive(Clone, Debug)]
pub struct MinHashDetector {
    extractor: ShingleExtractor,
    hasher: MinHasher,
    threshold: f64,
}

impl MinHashDetector {
    /// Creates an instance, drawing fresh coefficients.
    ///
    /// # Arguments
    ///
    /// * `config` - Detector settings. Without a fixed seed the coefficients
    ///              differ on every call, and so do the signatures.
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed().unwrap_or_else(rand::random::<u64>);
        let coefficients =
            Coefficients::generate(config.num_hashes(), config.max_coefficient(), seed)?;
        Self::with_coefficients(config, coefficients)
    }

    /// Creates an instance from prepared coefficients, e.g., ones restored from storage.
    ///
    /// The coefficients must have `config.num_hashes()` pairs.
    pub fn with_coefficients(config: &DetectorConfig, coefficients: Coefficients) -> Result<Self> {
        config.validate()?;
        if coefficients.len() != config.num_hashes() {
            return Err(PostdupError::input(format!(
                "Expected {} coefficient pairs, got {}.",
                config.num_hashes(),
                coefficients.len()
            )));
        }
        tracing::debug!(
            num_hashes = coefficients.len(),
            window_size = config.window_size(),
            threshold = config.similarity_threshold(),
            "built minhash detector"
        );
        Ok(Self {
            extractor: ShingleExtractor::new(config.feature_config()?),
            hasher: MinHasher::new(coefficients),
            threshold: config.similarity_threshold(),
        })
    }

    /// Computes the signature of a document.
    ///
    /// A document with fewer tokens than the window size gets the degenerate
    /// all-sentinel signature.
    pub fn generate_minhash<S>(&self, document: S) -> Signature
    where
        S: AsRef<str>,
    {
        self.hasher.signature(&self.extractor.extract(document))
    }

    /// Computes the signatures of many documents in parallel, in input order.
    pub fn generate_minhashes<D>(&self, documents: &[D]) -> Vec<Signature>
    where
        D: AsRef<str> + Sync,
    {
        tracing::debug!(num_documents = documents.len(), "generating minhash signatures");
        documents
            .par_iter()
            .map(|document| self.generate_minhash(document))
            .collect()
    }

    /// Estimates the Jaccard index of two signatures.
    ///
    /// Both signatures must have [`num_hashes`](Self::num_hashes) components,
    /// otherwise they cannot come from this detector's coefficients.
    pub fn minhash_similarity(&self, left: &Signature, right: &Signature) -> Result<f64> {
        let k = self.num_hashes();
        for sig in [left, right] {
            if sig.len() != k {
                return Err(MinwiseError::LengthMismatch {
                    left: sig.len(),
                    right: k,
                }
                .into());
            }
        }
        Ok(self.matching_fraction(left, right))
    }

    /// Estimates the Jaccard index of two documents.
    pub fn string_similarity<L, R>(&self, left: L, right: R) -> f64
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        let l = self.generate_minhash(left);
        let r = self.generate_minhash(right);
        self.matching_fraction(&l, &r)
    }

    // Both signatures have num_hashes() components, which is never 0.
    fn matching_fraction(&self, left: &Signature, right: &Signature) -> f64 {
        let matches = left
            .values()
            .iter()
            .zip(right.values())
            .filter(|(l, r)| l == r)
            .count();
        matches as f64 / self.num_hashes() as f64
    }

    /// Checks if two documents are estimated to be above the threshold.
    pub fn strings_similar<L, R>(&self, left: L, right: R) -> bool
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        self.string_similarity(left, right) > self.threshold
    }

    /// Checks if two serialized signatures are estimated to be above the threshold.
    ///
    /// Fails if either string is not a valid signature of
    /// [`num_hashes`](Self::num_hashes) components.
    pub fn minhash_similar(&self, left: &str, right: &str) -> Result<bool> {
        let l: Signature = left.parse()?;
        let r: Signature = right.parse()?;
        Ok(self.minhash_similarity(&l, &r)? > self.threshold)
    }

    /// Gets the number of hash functions, i.e., the signature length.
    pub fn num_hashes(&self) -> usize {
        self.hasher.num_hashes()
    }

    /// Gets the coefficients, e.g., to store them alongside signatures.
    pub fn coefficients(&self) -> &Coefficients {
        self.hasher.coefficients()
    }

    /// Gets the similarity threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
