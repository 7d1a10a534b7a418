//! Smoothed per-category word likelihoods.

use ahash::AHashMap;

/// P(word | category) under Lidstone smoothing with constant `k`.
///
/// Recorded words map to `(freq + k) / (total_words + k * vocab_size)`. Any
/// other word resolves to `k / (total_words + k * vocab_size)`, computed on
/// lookup and never stored. The three parameters are fixed at construction.
///
/// ```
/// use ahash::AHashMap;
/// use lexiclass::classifier::SmoothedLikelihoods;
///
/// let mut frequencies = AHashMap::new();
/// frequencies.insert("love".to_string(), 2);
///
/// let table = SmoothedLikelihoods::new(&frequencies, 4, 4, 1.0);
/// assert_eq!(table.probability("love"), 3.0 / 8.0);
/// assert_eq!(table.probability("blah"), 1.0 / 8.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedLikelihoods {
    probabilities: AHashMap<String, f64>,
    total_words: u64,
    vocab_size: usize,
    smoothing: f64,
}

impl SmoothedLikelihoods {
    /// Build the table from one category's raw word frequencies.
    ///
    /// `total_words` is the sum of all occurrences in the category and
    /// `vocab_size` the global vocabulary size once training finished.
    pub fn new(
        frequencies: &AHashMap<String, u64>,
        total_words: u64,
        vocab_size: usize,
        smoothing: f64,
    ) -> Self {
        let mut table = Self {
            probabilities: AHashMap::with_capacity(frequencies.len()),
            total_words,
            vocab_size,
            smoothing,
        };

        let denominator = table.denominator();
        for (word, &freq) in frequencies {
            table
                .probabilities
                .insert(word.clone(), (freq as f64 + smoothing) / denominator);
        }

        table
    }

    /// Table for a category with no training evidence; every lookup is the
    /// unseen-word value.
    pub fn empty(vocab_size: usize, smoothing: f64) -> Self {
        Self::new(&AHashMap::new(), 0, vocab_size, smoothing)
    }

    fn denominator(&self) -> f64 {
        // An empty vocabulary still has to leave room for the word being
        // looked up, otherwise k / 0.
        let vocab_size = self.vocab_size.max(1);
        self.total_words as f64 + self.smoothing * vocab_size as f64
    }

    /// Smoothed probability of `word`, recorded or fallback.
    pub fn probability(&self, word: &str) -> f64 {
        self.get(word).unwrap_or_else(|| self.unseen_probability())
    }

    pub fn log_probability(&self, word: &str) -> f64 {
        self.probability(word).ln()
    }

    /// Probability assigned to any word not recorded for this category.
    pub fn unseen_probability(&self) -> f64 {
        self.smoothing / self.denominator()
    }

    /// Recorded probability only; `None` for words without training counts.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.probabilities.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.probabilities.contains_key(word)
    }

    /// Number of recorded words.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities
            .iter()
            .map(|(word, &probability)| (word.as_str(), probability))
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }
}
