//! English analyzer.
//!
//! Pipeline: `\w+` tokenization, lowercasing, truncation at apostrophes,
//! removal of numbers, then English stop word removal. Punctuation and
//! whitespace never become tokens in the first place.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    ContractionFilter, LowercaseFilter, NumericFilter, StopFilter,
};
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self::with_tokenizer(Arc::new(RegexTokenizer::new()?)))
    }

    /// Same filters, but Unicode word boundaries instead of `\w+`.
    pub fn unicode() -> Self {
        Self::with_tokenizer(Arc::new(UnicodeWordTokenizer::new()))
    }

    fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(ContractionFilter::new()))
            .add_filter(Arc::new(NumericFilter::new()))
            .add_filter(Arc::new(StopFilter::default()))
            .with_name("english");

        Self { inner: analyzer }
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new().expect("English analyzer should be creatable with default settings")
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
