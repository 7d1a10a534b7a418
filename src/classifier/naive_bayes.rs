//! Multinomial Naive Bayes over pre-tokenized documents.

use ahash::AHashMap;
use log::{debug, info};
use rayon::prelude::*;

use crate::classifier::config::{ClassifierConfig, validate_smoothing};
use crate::classifier::likelihood::SmoothedLikelihoods;
use crate::classifier::types::{CategoryStats, Evaluation, TrainingSet};
use crate::classifier::vocabulary::Vocabulary;
use crate::error::{LexiclassError, Result};

/// Everything learned about one category.
#[derive(Debug, Clone)]
struct CategoryModel {
    label: String,
    documents: usize,
    frequencies: AHashMap<String, u64>,
    total_words: u64,
    prior: f64,
    likelihoods: SmoothedLikelihoods,
}

impl CategoryModel {
    fn new(label: String, smoothing: f64) -> Self {
        Self {
            label,
            documents: 0,
            frequencies: AHashMap::new(),
            total_words: 0,
            prior: 0.0,
            likelihoods: SmoothedLikelihoods::empty(0, smoothing),
        }
    }

    fn count(&mut self, token: &str) {
        match self.frequencies.get_mut(token) {
            Some(freq) => *freq += 1,
            None => {
                self.frequencies.insert(token.to_owned(), 1);
            }
        }
    }
}

/// Naive Bayes text classifier.
///
/// Training is cumulative: every call to [`train`](Self::train) adds its
/// documents to the vocabulary, word frequencies and document counts gathered
/// so far, then rebuilds priors and likelihood tables from the totals.
///
/// Category labels are case-folded on the way in, both for training and for
/// every accessor that takes a category name. Categories are kept in the
/// order they were first seen, which is also the tie-break order of
/// [`predict`](Self::predict).
///
/// The classifier has no interior mutability: `&mut self` training cannot
/// overlap `&self` prediction, and a trained instance can be shared across
/// threads for concurrent prediction.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    config: ClassifierConfig,
    vocabulary: Vocabulary,
    categories: Vec<CategoryModel>,
    category_index: AHashMap<String, usize>,
    total_documents: usize,
    smoothing: f64,
}

/// Case-fold a category label.
fn normalize_label(label: &str) -> String {
    label.to_lowercase()
}

impl NaiveBayesClassifier {
    /// Create an untrained classifier with Laplace smoothing.
    pub fn new() -> Self {
        let config = ClassifierConfig::default();
        Self {
            smoothing: config.smoothing,
            config,
            vocabulary: Vocabulary::new(),
            categories: Vec::new(),
            category_index: AHashMap::new(),
            total_documents: 0,
        }
    }

    /// Create an untrained classifier from a validated configuration.
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let mut classifier = Self::new();
        classifier.smoothing = config.smoothing;
        classifier.config = config;
        Ok(classifier)
    }

    /// Train on `(tokens, label)` pairs with the current smoothing constant.
    ///
    /// That is the configured constant until a
    /// [`train_with_smoothing`](Self::train_with_smoothing) call replaces it;
    /// later `train` calls keep the replacement.
    pub fn train(&mut self, dataset: &TrainingSet) -> Result<()> {
        self.train_with_smoothing(dataset, self.smoothing)
    }

    /// Train on `(tokens, label)` pairs with smoothing constant `k`.
    ///
    /// `k` must be finite and positive. The tokens are used as given; no
    /// filtering happens here. An empty dataset on a fresh classifier leaves
    /// it untrained without error.
    pub fn train_with_smoothing(&mut self, dataset: &TrainingSet, k: f64) -> Result<()> {
        validate_smoothing(k)?;
        debug!(
            "training on {} documents (k = {k}, {} documents seen before)",
            dataset.len(),
            self.total_documents
        );

        for (tokens, label) in dataset {
            let slot = self.category_slot(label, k);
            self.vocabulary.register(tokens);

            let category = &mut self.categories[slot];
            category.documents += 1;
            for token in tokens {
                category.count(token);
            }
        }

        self.total_documents += dataset.len();
        self.smoothing = k;
        self.rebuild();

        info!(
            "trained on {} documents across {} categories (vocabulary size {})",
            self.total_documents,
            self.categories.len(),
            self.vocabulary.len()
        );
        Ok(())
    }

    /// Position of the category for `label`, registering it when new.
    fn category_slot(&mut self, label: &str, smoothing: f64) -> usize {
        let label = normalize_label(label);
        if let Some(&slot) = self.category_index.get(&label) {
            return slot;
        }

        let slot = self.categories.len();
        debug!("new category {label:?}");
        self.category_index.insert(label.clone(), slot);
        self.categories.push(CategoryModel::new(label, smoothing));
        slot
    }

    /// Recompute priors, totals and likelihood tables from the raw counts.
    fn rebuild(&mut self) {
        if self.total_documents == 0 {
            return;
        }

        let vocab_size = self.vocabulary.len();
        for category in &mut self.categories {
            category.prior = category.documents as f64 / self.total_documents as f64;
            category.total_words = category.frequencies.values().sum();
            category.likelihoods = SmoothedLikelihoods::new(
                &category.frequencies,
                category.total_words,
                vocab_size,
                self.smoothing,
            );
        }
    }

    fn category(&self, category: &str) -> Option<&CategoryModel> {
        self.category_index
            .get(&normalize_label(category))
            .map(|&slot| &self.categories[slot])
    }

    /// Log-posterior of every category for `tokens`, in category order.
    ///
    /// Each score is `ln P(category) + Σ ln P(token | category)`.
    pub fn scores<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<(&str, f64)>> {
        if self.categories.is_empty() {
            return Err(LexiclassError::UntrainedModel);
        }

        Ok(self
            .categories
            .iter()
            .map(|category| {
                let evidence: f64 = tokens
                    .iter()
                    .map(|token| category.likelihoods.log_probability(token.as_ref()))
                    .sum();
                (category.label.as_str(), category.prior.ln() + evidence)
            })
            .collect())
    }

    /// Most probable category for `tokens`.
    ///
    /// Ties go to the category seen first during training. Empty input
    /// yields the category with the highest prior.
    pub fn predict<S: AsRef<str>>(&self, tokens: &[S]) -> Result<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (label, score) in self.scores(tokens)? {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((label, score)),
            }
        }

        best.map(|(label, _)| label)
            .ok_or(LexiclassError::UntrainedModel)
    }

    /// Normalized posterior probabilities, in category order, summing to 1.
    pub fn posteriors<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<(&str, f64)>> {
        let scores = self.scores(tokens)?;
        let max = scores
            .iter()
            .map(|&(_, score)| score)
            .fold(f64::NEG_INFINITY, f64::max);
        let norm: f64 = scores.iter().map(|&(_, score)| (score - max).exp()).sum();

        Ok(scores
            .into_iter()
            .map(|(label, score)| (label, (score - max).exp() / norm))
            .collect())
    }

    /// Predict many documents in parallel.
    pub fn predict_batch(&self, documents: &[Vec<String>]) -> Result<Vec<&str>> {
        documents
            .par_iter()
            .map(|tokens| self.predict(tokens))
            .collect()
    }

    /// Accuracy against labeled data; labels are case-folded before comparison.
    pub fn evaluate(&self, dataset: &TrainingSet) -> Result<Evaluation> {
        let correct = dataset
            .par_iter()
            .map(|(tokens, label)| {
                self.predict(tokens)
                    .map(|predicted| predicted == normalize_label(label))
            })
            .collect::<Result<Vec<bool>>>()?
            .into_iter()
            .filter(|&hit| hit)
            .count();

        Ok(Evaluation::new(dataset.len(), correct))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Category labels in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(|category| category.label.as_str())
    }

    /// `(category, P(category))` pairs in category order.
    pub fn priors(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.categories
            .iter()
            .map(|category| (category.label.as_str(), category.prior))
    }

    pub fn prior(&self, category: &str) -> Option<f64> {
        self.category(category).map(|category| category.prior)
    }

    /// Total word occurrences recorded for `category`; 0 for unknown categories.
    pub fn total_words_for_category(&self, category: &str) -> u64 {
        self.category(category)
            .map(|category| category.total_words)
            .unwrap_or(0)
    }

    /// Raw training frequency of `word` in `category`.
    pub fn word_frequency(&self, category: &str, word: &str) -> u64 {
        self.category(category)
            .and_then(|category| category.frequencies.get(word).copied())
            .unwrap_or(0)
    }

    /// `(category, likelihood table)` pairs in category order.
    pub fn word_likelihoods_per_category(
        &self,
    ) -> impl Iterator<Item = (&str, &SmoothedLikelihoods)> + '_ {
        self.categories
            .iter()
            .map(|category| (category.label.as_str(), &category.likelihoods))
    }

    pub fn likelihoods(&self, category: &str) -> Option<&SmoothedLikelihoods> {
        self.category(category).map(|category| &category.likelihoods)
    }

    /// P(word | category), falling back to the smoothed value of an empty
    /// category when `category` was never trained.
    pub fn likelihood(&self, category: &str, word: &str) -> f64 {
        match self.likelihoods(category) {
            Some(table) => table.probability(word),
            None => SmoothedLikelihoods::empty(self.vocabulary.len(), self.smoothing)
                .probability(word),
        }
    }

    /// Training summary of every category, in category order.
    pub fn category_stats(&self) -> Vec<CategoryStats> {
        self.categories
            .iter()
            .map(|category| CategoryStats {
                category: category.label.clone(),
                documents: category.documents,
                prior: category.prior,
                total_words: category.total_words,
                distinct_words: category.frequencies.len(),
            })
            .collect()
    }

    /// Number of training documents seen so far.
    pub fn document_count(&self) -> usize {
        self.total_documents
    }

    /// Smoothing constant used by the tables and by the next [`train`](Self::train).
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn is_trained(&self) -> bool {
        !self.categories.is_empty()
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(tokens: &[&str], label: &str) -> (Vec<String>, String) {
        (
            tokens.iter().map(|t| t.to_string()).collect(),
            label.to_string(),
        )
    }

    /// "love my cat" / "love my dog" / "hate my cat" with "my" filtered out.
    fn pets() -> Vec<(Vec<String>, String)> {
        vec![
            doc(&["love", "cat"], "positive"),
            doc(&["love", "dog"], "positive"),
            doc(&["hate", "cat"], "negative"),
        ]
    }

    fn trained() -> NaiveBayesClassifier {
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train_with_smoothing(&pets(), 1.0).unwrap();
        classifier
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_training_builds_vocabulary() {
        let classifier = trained();
        let vocab = classifier.vocabulary();

        assert_eq!(vocab.len(), 4);
        let mut words: Vec<&str> = vocab.iter().map(|(_, w)| w).collect();
        words.sort();
        assert_eq!(words, vec!["cat", "dog", "hate", "love"]);
    }

    #[test]
    fn test_training_counts_and_priors() {
        let classifier = trained();

        assert_eq!(classifier.total_words_for_category("positive"), 4);
        assert_eq!(classifier.total_words_for_category("negative"), 2);
        assert_eq!(classifier.total_words_for_category("neutral"), 0);

        assert_close(classifier.prior("positive").unwrap(), 2.0 / 3.0);
        assert_close(classifier.prior("negative").unwrap(), 1.0 / 3.0);
        assert_eq!(classifier.prior("neutral"), None);

        let sum: f64 = classifier.priors().map(|(_, p)| p).sum();
        assert_close(sum, 1.0);
    }

    #[test]
    fn test_training_likelihoods() {
        let classifier = trained();

        assert_close(classifier.likelihood("positive", "love"), 3.0 / 8.0);
        assert_close(classifier.likelihood("positive", "cat"), 2.0 / 8.0);
        assert_close(classifier.likelihood("positive", "dog"), 2.0 / 8.0);
        assert_close(classifier.likelihood("positive", "hate"), 1.0 / 8.0);

        assert_close(classifier.likelihood("negative", "love"), 1.0 / 6.0);
        assert_close(classifier.likelihood("negative", "cat"), 2.0 / 6.0);
        assert_close(classifier.likelihood("negative", "dog"), 1.0 / 6.0);
        assert_close(classifier.likelihood("negative", "hate"), 2.0 / 6.0);

        assert_close(classifier.likelihood("positive", "blah"), 1.0 / 8.0);
        assert_close(classifier.likelihood("negative", "blah"), 1.0 / 6.0);
    }

    #[test]
    fn test_unknown_category_likelihood_defaults() {
        let classifier = trained();
        // No evidence: k / (0 + k * |V|)
        assert_close(classifier.likelihood("neutral", "love"), 1.0 / 4.0);
        assert!(classifier.likelihoods("neutral").is_none());
    }

    #[test]
    fn test_labels_are_case_folded() {
        let mut classifier = NaiveBayesClassifier::new();
        classifier
            .train(&[
                doc(&["love", "cat"], "Positive"),
                doc(&["love", "dog"], "POSITIVE"),
                doc(&["hate", "cat"], "negative"),
            ])
            .unwrap();

        assert_eq!(classifier.categories().collect::<Vec<_>>(), vec!["positive", "negative"]);
        assert_eq!(classifier.total_words_for_category("Positive"), 4);
        assert_close(classifier.prior("POSITIVE").unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn test_repeated_tokens_count_every_occurrence() {
        let mut classifier = NaiveBayesClassifier::new();
        classifier
            .train(&[doc(&["boss", "boss", "boss", "gabagool"], "mob")])
            .unwrap();

        assert_eq!(classifier.word_frequency("mob", "boss"), 3);
        assert_eq!(classifier.total_words_for_category("mob"), 4);
        assert_eq!(classifier.category_stats()[0].distinct_words, 2);
        // (3 + 1) / (4 + 1 * 2)
        assert_close(classifier.likelihood("mob", "boss"), 4.0 / 6.0);
    }

    #[test]
    fn test_empty_dataset() {
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train(&[]).unwrap();

        assert!(!classifier.is_trained());
        assert_eq!(classifier.priors().count(), 0);
        assert_eq!(classifier.word_likelihoods_per_category().count(), 0);
        assert!(matches!(
            classifier.predict(&["love"]),
            Err(LexiclassError::UntrainedModel)
        ));
    }

    #[test]
    fn test_predict() {
        let classifier = trained();

        assert_eq!(classifier.predict(&["love", "cat"]).unwrap(), "positive");
        assert_eq!(classifier.predict(&["hate"]).unwrap(), "negative");
    }

    #[test]
    fn test_predict_empty_tokens_uses_prior() {
        let classifier = trained();
        let empty: [&str; 0] = [];
        assert_eq!(classifier.predict(&empty).unwrap(), "positive");

        let scores = classifier.scores(&empty).unwrap();
        assert_close(scores[0].1, (2.0f64 / 3.0).ln());
    }

    #[test]
    fn test_predict_tie_goes_to_first_category() {
        let mut classifier = NaiveBayesClassifier::new();
        classifier
            .train(&[doc(&["left"], "zeta"), doc(&["right"], "alpha")])
            .unwrap();

        // Identical priors, and "middle" is unseen in both categories.
        assert_eq!(classifier.predict(&["middle"]).unwrap(), "zeta");
    }

    #[test]
    fn test_log_space_avoids_underflow() {
        let mut classifier = NaiveBayesClassifier::new();
        let spam: Vec<String> = (0..200).map(|i| format!("offer{i}")).collect();
        let ham: Vec<String> = (0..200).map(|i| format!("meeting{i}")).collect();
        classifier
            .train(&[(spam.clone(), "spam".into()), (ham, "ham".into())])
            .unwrap();

        let long_document: Vec<String> = spam.iter().cycle().take(2000).cloned().collect();
        let scores = classifier.scores(&long_document).unwrap();

        assert!(scores.iter().all(|(_, s)| s.is_finite()));
        assert_eq!(classifier.predict(&long_document).unwrap(), "spam");
    }

    #[test]
    fn test_posteriors_sum_to_one() {
        let classifier = trained();
        let posteriors = classifier.posteriors(&["love", "cat"]).unwrap();

        assert_eq!(posteriors.len(), 2);
        assert_close(posteriors.iter().map(|(_, p)| p).sum::<f64>(), 1.0);
        assert!(posteriors[0].1 > posteriors[1].1);
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let classifier = trained();

        let priors_a: Vec<(String, f64)> =
            classifier.priors().map(|(c, p)| (c.to_string(), p)).collect();
        let tables_a: Vec<SmoothedLikelihoods> = classifier
            .word_likelihoods_per_category()
            .map(|(_, t)| t.clone())
            .collect();
        let _ = classifier.likelihood("positive", "never-seen");
        let _ = classifier.likelihood("missing", "never-seen");

        let priors_b: Vec<(String, f64)> =
            classifier.priors().map(|(c, p)| (c.to_string(), p)).collect();
        let tables_b: Vec<SmoothedLikelihoods> = classifier
            .word_likelihoods_per_category()
            .map(|(_, t)| t.clone())
            .collect();

        assert_eq!(priors_a, priors_b);
        assert_eq!(tables_a, tables_b);
    }

    #[test]
    fn test_cumulative_training() {
        let mut classifier = NaiveBayesClassifier::new();
        let data = pets();
        classifier.train(&data[..2]).unwrap();
        assert_eq!(classifier.categories().count(), 1);
        assert_close(classifier.prior("positive").unwrap(), 1.0);

        classifier.train(&data[2..]).unwrap();
        assert_eq!(classifier.document_count(), 3);
        assert_close(classifier.prior("positive").unwrap(), 2.0 / 3.0);
        assert_close(classifier.likelihood("positive", "love"), 3.0 / 8.0);
        assert_close(classifier.likelihood("negative", "hate"), 2.0 / 6.0);
    }

    #[test]
    fn test_lidstone_smoothing_constant() {
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train_with_smoothing(&pets(), 0.5).unwrap();

        assert_eq!(classifier.smoothing(), 0.5);
        // (2 + 0.5) / (4 + 0.5 * 4)
        assert_close(classifier.likelihood("positive", "love"), 2.5 / 6.0);
    }

    #[test]
    fn test_train_keeps_explicit_smoothing() {
        let data = pets();
        let mut classifier = NaiveBayesClassifier::new();
        classifier.train_with_smoothing(&data[..2], 0.5).unwrap();
        classifier.train(&data[2..]).unwrap();

        assert_eq!(classifier.smoothing(), 0.5);
        assert_eq!(classifier.config().smoothing, 1.0);
        assert_close(classifier.likelihood("positive", "love"), 2.5 / 6.0);

        let mut configured =
            NaiveBayesClassifier::with_config(ClassifierConfig::with_smoothing(0.5)).unwrap();
        configured.train(&data).unwrap();
        assert_eq!(configured.smoothing(), 0.5);
        assert_close(configured.likelihood("positive", "love"), 2.5 / 6.0);
    }

    #[test]
    fn test_invalid_smoothing() {
        let mut classifier = NaiveBayesClassifier::new();
        assert!(matches!(
            classifier.train_with_smoothing(&pets(), 0.0),
            Err(LexiclassError::InvalidArgument(_))
        ));
        assert!(!classifier.is_trained());
        assert!(NaiveBayesClassifier::with_config(ClassifierConfig::with_smoothing(-2.0)).is_err());
    }

    #[test]
    fn test_predict_batch_and_evaluate() {
        let classifier = trained();
        let documents = vec![
            vec!["love".to_string(), "cat".to_string()],
            vec!["hate".to_string()],
        ];

        assert_eq!(
            classifier.predict_batch(&documents).unwrap(),
            vec!["positive", "negative"]
        );

        let evaluation = classifier
            .evaluate(&[doc(&["love", "dog"], "Positive"), doc(&["hate"], "positive")])
            .unwrap();
        assert_eq!(evaluation.total, 2);
        assert_eq!(evaluation.correct, 1);
        assert_close(evaluation.accuracy, 0.5);
    }
}
