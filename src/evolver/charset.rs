//! Alphabet from which random characters are drawn.

use super::random::RandomSource;

/// A closed alphabet of symbols.
///
/// The default is the 26 lowercase ASCII letters followed by a space.
/// The set is fixed for the lifetime of a run.
///
/// # Examples
///
/// ```
/// use u_evolver::evolver::CharacterSet;
///
/// let default = CharacterSet::default();
/// assert_eq!(default.len(), 27);
/// assert!(default.contains(' '));
///
/// let cat = CharacterSet::from("cat");
/// assert_eq!(cat.symbols(), &['c', 'a', 't']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct CharacterSet {
    symbols: Vec<char>,
}

impl CharacterSet {
    /// Lowercase ASCII letters plus space.
    pub fn lowercase_with_space() -> Self {
        ('a'..='z').chain(std::iter::once(' ')).collect()
    }

    /// The symbols in draw order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the set has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether `c` belongs to the set.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Draws one symbol uniformly at random.
    ///
    /// # Panics
    /// Panics if the set is empty. Configurations with an empty set are
    /// rejected by validation, so the evolver never reaches this.
    pub fn sample<S: RandomSource + ?Sized>(&self, rng: &mut S) -> char {
        self.symbols[rng.next_index(self.symbols.len())]
    }
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::lowercase_with_space()
    }
}

/// Duplicate symbols are dropped, keeping the first occurrence.
impl FromIterator<char> for CharacterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut symbols = Vec::new();
        for c in iter {
            if !symbols.contains(&c) {
                symbols.push(c);
            }
        }
        Self { symbols }
    }
}

impl From<&str> for CharacterSet {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<String> for CharacterSet {
    fn from(s: String) -> Self {
        s.chars().collect()
    }
}

impl From<CharacterSet> for String {
    fn from(set: CharacterSet) -> Self {
        set.symbols.into_iter().collect()
    }
}
