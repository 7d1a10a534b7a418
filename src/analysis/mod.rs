//! Text analysis module for Lexiclass.
//!
//! The classifier core consumes already-tokenized documents. This module is
//! the tokenization collaborator that produces them: raw text goes through a
//! tokenizer, then a chain of token filters, and comes out as lowercase word
//! tokens with punctuation, numerals and stop words removed.

pub mod analyzer;
pub mod reader;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use reader::WordReader;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
