//! Bag-of-words document representation and vectorization.

use ahash::AHashMap;

use crate::classifier::vocabulary::Vocabulary;

/// Occurrence counts of each word in a single document.
///
/// A word absent from the bag has an implicit count of zero.
///
/// ```
/// use lexiclass::classifier::WordBag;
///
/// let bag = WordBag::from_tokens(["test", "word", "woman", "mystery", "test"]);
/// assert_eq!(bag.count("test"), 2);
/// assert_eq!(bag.count("lady"), 0);
/// assert_eq!(bag.total(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBag {
    counts: AHashMap<String, usize>,
}

impl WordBag {
    /// Tally the tokens of one document.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: AHashMap<String, usize> = AHashMap::new();
        for token in tokens {
            let token = token.as_ref();
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_owned(), 1);
                }
            }
        }
        Self { counts }
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens the bag was built from.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordBag {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

/// Project a bag onto a vector indexed by vocabulary position.
///
/// The result has `vocab.len()` entries. Words missing from the vocabulary
/// are skipped, so a frozen vocabulary can be used for inference-time
/// features.
pub fn vectorize(bag: &WordBag, vocab: &Vocabulary) -> Vec<usize> {
    let mut vector = vec![0; vocab.len()];

    for (word, count) in bag.iter() {
        if let Some(index) = vocab.index_of(word) {
            vector[index] = count;
        }
    }

    vector
}
