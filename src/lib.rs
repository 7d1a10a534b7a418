//! # Lexiclass
//!
//! A multinomial Naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Incremental vocabulary and per-category word statistics
//! - Lidstone/Laplace smoothing with a side-effect-free unseen-word fallback
//! - Log-space posterior scoring
//! - Pluggable text analysis pipeline
//! - Thread-safe shared classifier for concurrent prediction

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod dataset;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
    pub use crate::classifier::{
        ClassifierConfig, LabeledDocument, NaiveBayesClassifier, SharedClassifier,
        SmoothedLikelihoods, TextClassifier, Vocabulary, WordBag, vectorize,
    };
    pub use crate::error::{LexiclassError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
