//! Common types for text classification.

use serde::{Deserialize, Serialize};

/// A labeled raw-text document, the on-disk training record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledDocument {
    /// Document text.
    pub text: String,
    /// Category label.
    pub label: String,
}

impl LabeledDocument {
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Tokenized training data: (document tokens, category label) pairs.
pub type TrainingSet = [(Vec<String>, String)];

/// Per-category training summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub documents: usize,
    pub prior: f64,
    /// Total word occurrences, not distinct words.
    pub total_words: u64,
    pub distinct_words: usize,
}

/// Accuracy of a classifier against labeled data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
}

impl Evaluation {
    pub(crate) fn new(total: usize, correct: usize) -> Self {
        let accuracy = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        };
        Self {
            total,
            correct,
            accuracy,
        }
    }
}
