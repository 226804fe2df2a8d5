//! Sets of shingle identifiers.
use hashbrown::hash_set::{self, HashSet};

/// Identifier of a token window, the CRC-32 of its text.
pub type Shingle = u32;

/// A set of unique shingles representing one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShingleSet {
    shingles: HashSet<Shingle>,
}

impl ShingleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shingle, returning `false` if it was already present.
    pub fn insert(&mut self, shingle: Shingle) -> bool {
        self.shingles.insert(shingle)
    }

    /// Checks if the shingle is in the set.
    pub fn contains(&self, shingle: Shingle) -> bool {
        self.shingles.contains(&shingle)
    }

    /// Gets the number of unique shingles.
    pub fn len(&self) -> usize {
        self.shingles.len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.shingles.is_empty()
    }

    /// Iterates the shingles in arbitrary order.
    pub fn iter(&self) -> ShingleIter<'_> {
        ShingleIter {
            inner: self.shingles.iter(),
        }
    }

    /// Computes the exact Jaccard index against another set.
    pub fn jaccard(&self, other: &Self) -> f64 {
        crate::jaccard_similarity(self.iter(), other.iter())
    }
}

impl FromIterator<Shingle> for ShingleSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Shingle>,
    {
        Self {
            shingles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Shingle> for ShingleSet {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Shingle>,
    {
        self.shingles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ShingleSet {
    type Item = Shingle;
    type IntoIter = ShingleIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the shingles of a [`ShingleSet`].
pub struct ShingleIter<'a> {
    inner: hash_set::Iter<'a, Shingle>,
}

impl<'a> Iterator for ShingleIter<'a> {
    type Item = Shingle;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
