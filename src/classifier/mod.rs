//! Multinomial Naive Bayes text classification.
//!
//! # Architecture
//!
//! - `Vocabulary`: dense, first-seen word indices
//! - `WordBag` / `vectorize`: per-document counts and their array form
//! - `SmoothedLikelihoods`: Lidstone-smoothed P(word|category) with an
//!   on-demand fallback for unseen words
//! - `NaiveBayesClassifier`: training and log-space inference over token
//!   sequences
//! - `TextClassifier` / `SharedClassifier`: the same model bound to an
//!   analyzer, for callers holding raw text
//!
//! # Example
//!
//! ```
//! use lexiclass::classifier::NaiveBayesClassifier;
//!
//! # fn main() -> lexiclass::error::Result<()> {
//! let dataset = vec![
//!     (vec!["love".to_string(), "cat".to_string()], "positive".to_string()),
//!     (vec!["love".to_string(), "dog".to_string()], "positive".to_string()),
//!     (vec!["hate".to_string(), "cat".to_string()], "negative".to_string()),
//! ];
//!
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier.train(&dataset)?;
//!
//! assert_eq!(classifier.predict(&["love", "cat"])?, "positive");
//! # Ok(())
//! # }
//! ```

mod config;
mod likelihood;
mod naive_bayes;
mod text;
mod types;
mod vocabulary;
mod word_bag;

pub use config::ClassifierConfig;
pub use likelihood::SmoothedLikelihoods;
pub use naive_bayes::NaiveBayesClassifier;
pub use text::{SharedClassifier, TextClassifier};
pub use types::{CategoryStats, Evaluation, LabeledDocument, TrainingSet};
pub use vocabulary::Vocabulary;
pub use word_bag::{WordBag, vectorize};
