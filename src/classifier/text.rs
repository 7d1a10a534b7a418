//! Classifiers that take raw text.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use log::debug;
use parking_lot::{RwLock, RwLockReadGuard};
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::classifier::config::ClassifierConfig;
use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::classifier::types::{Evaluation, LabeledDocument};
use crate::error::Result;

/// A [`NaiveBayesClassifier`] bound to the analyzer that tokenizes its input.
///
/// The analyzer is injected, so the same model code can run behind the
/// English pipeline, a Unicode-aware one, or a stub in tests.
pub struct TextClassifier {
    analyzer: Arc<dyn Analyzer>,
    model: NaiveBayesClassifier,
}

impl Debug for TextClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextClassifier")
            .field("analyzer", &self.analyzer.name())
            .field("model", &self.model)
            .finish()
    }
}

impl TextClassifier {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::with_model(analyzer, NaiveBayesClassifier::new())
    }

    pub fn with_config(analyzer: Arc<dyn Analyzer>, config: ClassifierConfig) -> Result<Self> {
        Ok(Self::with_model(
            analyzer,
            NaiveBayesClassifier::with_config(config)?,
        ))
    }

    pub fn with_model(analyzer: Arc<dyn Analyzer>, model: NaiveBayesClassifier) -> Self {
        Self { analyzer, model }
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    pub fn model(&self) -> &NaiveBayesClassifier {
        &self.model
    }

    /// Tokenize `text` with this classifier's analyzer.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.analyzer.analyze_words(text)
    }

    fn tokenize_documents(
        &self,
        documents: &[LabeledDocument],
    ) -> Result<Vec<(Vec<String>, String)>> {
        documents
            .par_iter()
            .map(|document| {
                self.tokenize(&document.text)
                    .map(|tokens| (tokens, document.label.clone()))
            })
            .collect()
    }

    /// Tokenize and train on labeled documents.
    pub fn train(&mut self, documents: &[LabeledDocument]) -> Result<()> {
        debug!(
            "analyzing {} documents with {}",
            documents.len(),
            self.analyzer.name()
        );
        let dataset = self.tokenize_documents(documents)?;
        self.model.train(&dataset)
    }

    pub fn predict(&self, text: &str) -> Result<&str> {
        let tokens = self.tokenize(text)?;
        self.model.predict(&tokens)
    }

    /// Normalized posterior of every category for `text`.
    pub fn posteriors(&self, text: &str) -> Result<Vec<(&str, f64)>> {
        let tokens = self.tokenize(text)?;
        self.model.posteriors(&tokens)
    }

    pub fn evaluate(&self, documents: &[LabeledDocument]) -> Result<Evaluation> {
        let dataset = self.tokenize_documents(documents)?;
        self.model.evaluate(&dataset)
    }
}

/// A [`TextClassifier`] shared between threads.
///
/// Training takes the write lock; predictions share the read lock, so
/// readers never observe a half-rebuilt model.
#[derive(Debug, Clone)]
pub struct SharedClassifier {
    inner: Arc<RwLock<TextClassifier>>,
}

impl SharedClassifier {
    pub fn new(classifier: TextClassifier) -> Self {
        Self {
            inner: Arc::new(RwLock::new(classifier)),
        }
    }

    pub fn train(&self, documents: &[LabeledDocument]) -> Result<()> {
        self.inner.write().train(documents)
    }

    pub fn predict(&self, text: &str) -> Result<String> {
        self.inner.read().predict(text).map(str::to_owned)
    }

    /// Read access to the underlying classifier.
    pub fn read(&self) -> RwLockReadGuard<'_, TextClassifier> {
        self.inner.read()
    }
}
