//! Numeric filter implementation.
//!
//! Drops tokens made up entirely of numeric characters ("1", "100", "٣"),
//! including formatted numbers with `.` or `,` separators ("3.14", "1,000").
//! Mixed tokens such as "mp3" or "4th" are kept.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes digit-only tokens from the token stream.
#[derive(Clone, Debug, Default)]
pub struct NumericFilter;

impl NumericFilter {
    /// Create a new numeric filter.
    pub fn new() -> Self {
        NumericFilter
    }

    /// Check whether a token text is a number: numeric characters, optionally
    /// grouped or split by `.` and `,`.
    pub fn is_numeric(text: &str) -> bool {
        text.chars().any(char::is_numeric)
            && text.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
    }
}

impl Filter for NumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.is_stopped() || !Self::is_numeric(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "numeric"
    }
}
