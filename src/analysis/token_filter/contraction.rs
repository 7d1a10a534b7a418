//! Contraction filter implementation.
//!
//! Word-boundary tokenizers keep "you're", "it's" and "don't" as single
//! tokens. This filter cuts each token at its first apostrophe so the stem
//! ("you", "it", "don") can be matched by the stop list. Possessives go the
//! same way: "cat's" becomes "cat".

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// A filter that truncates tokens at their first apostrophe.
///
/// Tokens with nothing before the apostrophe are removed.
#[derive(Clone, Debug, Default)]
pub struct ContractionFilter;

impl ContractionFilter {
    /// Create a new contraction filter.
    pub fn new() -> Self {
        ContractionFilter
    }

    /// The part of `text` before its first apostrophe.
    pub fn stem(text: &str) -> &str {
        match text.find(APOSTROPHES) {
            Some(idx) => &text[..idx],
            None => text,
        }
    }
}

impl Filter for ContractionFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    return Some(token);
                }
                let stem = Self::stem(&token.text);
                if stem.len() == token.text.len() {
                    Some(token)
                } else if stem.is_empty() {
                    None
                } else {
                    let end = token.start_offset + stem.len();
                    let stem = stem.to_owned();
                    let mut token = token.with_text(stem);
                    if token.end_offset > end {
                        token.end_offset = end;
                    }
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "contraction"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contraction_filter() {
        let filter = ContractionFilter::new();
        let tokens = vec![
            Token::with_offsets("you're", 0, 0, 6),
            Token::new("don\u{2019}t", 1),
            Token::new("cat's", 2),
            Token::new("place", 3),
            Token::new("'", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "you");
        assert_eq!(result[0].end_offset, 3);
        assert_eq!(result[1].text, "don");
        assert_eq!(result[2].text, "cat");
        assert_eq!(result[3].text, "place");
    }

    #[test]
    fn test_stem() {
        assert_eq!(ContractionFilter::stem("i'm"), "i");
        assert_eq!(ContractionFilter::stem("rock'n'roll"), "rock");
        assert_eq!(ContractionFilter::stem("3.14"), "3.14");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(ContractionFilter::new().name(), "contraction");
    }
}
