//! Word-shingle extraction from documents.
use minwise::{hash_str, ShingleSet};

use crate::errors::{PostdupError, Result};
use crate::wordset::WordSet;

/// Number of tokens in a shingle by default.
pub const WINDOW_SIZE: usize = 3;

/// Token delimiter by default.
pub const DELIMITER: char = ' ';

/// Configuration of feature extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureConfig {
    window_size: usize,
    delimiter: char,
}

impl FeatureConfig {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `window_size` - Window size for w-shingling (must be more than 0).
    /// * `delimiter` - Character splitting a document into tokens.
    pub fn new(window_size: usize, delimiter: char) -> Result<Self> {
        if window_size == 0 {
            return Err(PostdupError::input("Window size must not be 0."));
        }
        Ok(Self {
            window_size,
            delimiter,
        })
    }

    /// Gets the window size.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Gets the delimiter.
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            delimiter: DELIMITER,
        }
    }
}

/// Extractor of word shingles.
///
/// A document is split on every occurrence of the delimiter, with no other
/// whitespace handling, so punctuation stays attached to its token and
/// consecutive delimiters produce empty tokens. Each window of consecutive
/// tokens is joined by the delimiter and lower-cased.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShingleExtractor {
    config: FeatureConfig,
}

impl ShingleExtractor {
    /// Creates an instance.
    pub const fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// Gets the configuration.
    pub const fn config(&self) -> FeatureConfig {
        self.config
    }

    /// Collects the lower-cased windows of `text` in document order.
    ///
    /// A document with fewer tokens than the window size has no windows.
    /// Lower-casing follows [`str::to_lowercase`], which maps a word-final
    /// capital sigma to `ς`, so `"ΟΔΟΣ"` becomes `"οδος"` rather than `"οδοσ"`.
    pub fn windows<S>(&self, text: S) -> Vec<String>
    where
        S: AsRef<str>,
    {
        let tokens: Vec<&str> = text.as_ref().split(self.config.delimiter).collect();
        let mut buf = [0; 4];
        let delimiter: &str = self.config.delimiter.encode_utf8(&mut buf);
        // window_size is at least 1, checked by FeatureConfig::new.
        tokens
            .windows(self.config.window_size)
            .map(|window| window.join(delimiter).to_lowercase())
            .collect()
    }

    /// Hashes the windows of `text` into a set of shingles.
    pub fn extract<S>(&self, text: S) -> ShingleSet
    where
        S: AsRef<str>,
    {
        let shingles: ShingleSet = self
            .windows(text)
            .iter()
            .map(|window| hash_str(window))
            .collect();
        if shingles.is_empty() {
            tracing::trace!(
                window_size = self.config.window_size,
                "document has too few tokens for a shingle"
            );
        }
        shingles
    }

    /// Collects the windows of `text` into a [`WordSet`].
    pub fn word_set<S>(&self, text: S) -> WordSet
    where
        S: AsRef<str>,
    {
        self.windows(text).into_iter().collect()
    }
}
