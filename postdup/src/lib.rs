//! Near-duplicate detection of documents, such as job postings.
//!
//! Documents are reduced to overlapping 3-token windows. Two estimators are provided:
//!
//! * [`jaccard_similarity`] and [`similar`] compare the exact window sets;
//! * [`MinHashDetector`] compares fixed-length MinHash signatures, which can be
//!   computed once per document, stored in their text form, and compared in
//!   constant time.
//!
//! ```
//! use postdup::{DetectorConfig, MinHashDetector};
//!
//! let detector = MinHashDetector::new(&DetectorConfig::default().with_seed(42)).unwrap();
//! let posting = "Senior Software Engineer wanted to join a rapidly growing team in Oakland";
//! let stored = detector.generate_minhash(posting).to_string();
//!
//! assert!(detector.strings_similar(posting, posting));
//! assert!(detector.minhash_similar(&stored, &stored).unwrap());
//! assert!(postdup::similar(posting, posting));
//! ```
#![deny(missing_docs)]

pub mod config;
pub mod errors;
pub mod feature;
pub mod jaccard;
pub mod minhash;
pub mod wordset;

pub use config::DetectorConfig;
pub use errors::{PostdupError, Result};
pub use feature::{FeatureConfig, ShingleExtractor};
pub use jaccard::{jaccard_index, jaccard_similarity, similar, similar_word_sets, JaccardScorer};
pub use minhash::MinHashDetector;
pub use minwise::{Coefficients, Signature};
pub use wordset::WordSet;

/// Two documents are duplicates if about 79.9% of their windows are shared.
pub const SIMILARITY_THRESHOLD: f64 = 0.799;
