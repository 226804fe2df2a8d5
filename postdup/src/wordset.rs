//! Sets of lower-cased word windows for exact Jaccard computation.
use hashbrown::HashSet;

use crate::feature::ShingleExtractor;

/// A set of lower-cased word windows representing one document.
///
/// Every key is lower-cased on the way in and on lookup, so membership is
/// case-insensitive. The length is always the number of live members.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSet {
    membership: HashSet<String>,
}

impl WordSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set of 3-token windows of `text`.
    pub fn from_text<S>(text: S) -> Self
    where
        S: AsRef<str>,
    {
        ShingleExtractor::default().word_set(text)
    }

    /// Adds a word, returning `false` if it was already present.
    pub fn add<S>(&mut self, word: S) -> bool
    where
        S: AsRef<str>,
    {
        self.membership.insert(word.as_ref().to_lowercase())
    }

    /// Removes a word, returning `false` if it was absent.
    pub fn remove<S>(&mut self, word: S) -> bool
    where
        S: AsRef<str>,
    {
        self.membership.remove(&word.as_ref().to_lowercase())
    }

    /// Checks if the word is in the set.
    pub fn contains<S>(&self, word: S) -> bool
    where
        S: AsRef<str>,
    {
        self.membership.contains(&word.as_ref().to_lowercase())
    }

    /// Gets the number of words.
    pub fn len(&self) -> usize {
        self.membership.len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    /// Iterates the words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.membership.iter().map(String::as_str)
    }

    /// Counts the words shared with `other`.
    pub fn intersection(&self, other: &Self) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .membership
            .iter()
            .filter(|w| large.membership.contains(*w))
            .count()
    }
}

impl<S> FromIterator<S> for WordSet
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut ws = Self::new();
        ws.extend(iter);
        ws
    }
}

impl<S> Extend<S> for WordSet
where
    S: AsRef<str>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>,
    {
        for word in iter {
            self.add(word);
        }
    }
}
