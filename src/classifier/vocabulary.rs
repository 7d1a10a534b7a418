//! Vocabulary: the words seen by the classifier and their permanent indices.

use ahash::AHashMap;

/// Bidirectional mapping between registered words and dense indices.
///
/// Indices are zero-based and assigned in first-seen order. A word keeps its
/// index for the lifetime of the vocabulary; nothing is ever removed.
///
/// ```
/// use lexiclass::classifier::Vocabulary;
///
/// let mut vocab = Vocabulary::new();
/// vocab.register(["test", "word", "woman", "mystery"]);
///
/// assert_eq!(vocab.index_of("woman"), Some(2));
/// assert_eq!(vocab.index_of("lady"), None);
/// assert_eq!(vocab.word_at(0), Some("test"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    indices: AHashMap<String, usize>,
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every word not seen before, assigning the next free index.
    ///
    /// Already-registered words are left untouched.
    pub fn register<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if !self.indices.contains_key(word) {
                self.indices.insert(word.to_owned(), self.words.len());
                self.words.push(word.to_owned());
            }
        }
    }

    /// Index assigned to `word`, or `None` if it was never registered.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.indices.get(word).copied()
    }

    /// Word registered at `index`, or `None` for an unassigned index.
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.indices.contains_key(word)
    }

    /// Number of distinct registered words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Registered words in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// `(index, word)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.words.iter().map(String::as_str).enumerate()
    }
}
