//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the "text in, tokens out" capability the classifier
//! layer is handed at construction time:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Classifier
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! Implementing a custom analyzer, e.g. a stub for tests:
//!
//! ```
//! use lexiclass::analysis::analyzer::Analyzer;
//! use lexiclass::analysis::token::{Token, TokenStream};
//! use lexiclass::error::Result;
//!
//! struct SplitAnalyzer;
//!
//! impl Analyzer for SplitAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let tokens: Vec<Token> = text
//!             .split_whitespace()
//!             .enumerate()
//!             .map(|(i, w)| Token::new(w, i))
//!             .collect();
//!         Ok(Box::new(tokens.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "split"
//!     }
//! }
//!
//! let words: Vec<String> = SplitAnalyzer.analyze_words("love cat").unwrap();
//! assert_eq!(words, vec!["love", "cat"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can be shared by a
/// classifier that serves concurrent predictions.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the given text and keep only the token texts.
    fn analyze_words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
