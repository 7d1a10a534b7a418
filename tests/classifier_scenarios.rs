use std::sync::Arc;
use std::thread;

use lexiclass::analysis::WordReader;
use lexiclass::analysis::analyzer::EnglishAnalyzer;
use lexiclass::classifier::{
    LabeledDocument, NaiveBayesClassifier, SharedClassifier, TextClassifier, WordBag, vectorize,
};
use lexiclass::error::{LexiclassError, Result};

fn pets() -> Vec<LabeledDocument> {
    vec![
        LabeledDocument::new("love my cat", "positive"),
        LabeledDocument::new("love my dog", "positive"),
        LabeledDocument::new("hate my cat", "negative"),
    ]
}

fn tokenized_pets() -> Result<Vec<(Vec<String>, String)>> {
    let reader = WordReader::default();
    pets()
        .into_iter()
        .map(|document| {
            reader
                .parse_words(&document.text)
                .map(|tokens| (tokens, document.label))
        })
        .collect()
}

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn stop_word_filtered_pets_produce_expected_model() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.train_with_smoothing(&tokenized_pets()?, 1.0)?;

    assert_eq!(classifier.vocabulary().len(), 4);
    assert!(classifier.vocabulary().index_of("my").is_none());
    assert_eq!(classifier.total_words_for_category("positive"), 4);
    assert_eq!(classifier.total_words_for_category("negative"), 2);

    assert!(approx(classifier.prior("positive").unwrap_or_default(), 2.0 / 3.0));
    assert!(approx(classifier.prior("negative").unwrap_or_default(), 1.0 / 3.0));
    assert!(approx(classifier.likelihood("positive", "love"), 3.0 / 8.0));
    assert!(approx(classifier.likelihood("negative", "hate"), 2.0 / 6.0));
    assert!(approx(classifier.likelihood("positive", "blah"), 1.0 / 8.0));
    assert!(approx(classifier.likelihood("negative", "blah"), 1.0 / 6.0));

    assert_eq!(classifier.predict(&["love", "cat"])?, "positive");
    Ok(())
}

#[test]
fn unseen_word_lookups_leave_the_model_untouched() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.train(&tokenized_pets()?)?;

    let before = classifier.likelihoods("positive").cloned();
    for _ in 0..3 {
        classifier.likelihood("positive", "blah");
        classifier.predict(&["blah", "gabagool"])?;
    }

    assert_eq!(classifier.likelihoods("positive").cloned(), before);
    assert!(!classifier.vocabulary().contains("blah"));
    Ok(())
}

#[test]
fn predicting_before_training_is_an_error() {
    let classifier = NaiveBayesClassifier::new();
    let result = classifier.predict(&["love"]);
    assert!(matches!(result, Err(LexiclassError::UntrainedModel)));
}

#[test]
fn vectorizing_against_the_training_vocabulary() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.train(&tokenized_pets()?)?;
    let vocabulary = classifier.vocabulary();

    let bag = WordBag::from_tokens(["cat", "cat", "love", "parrot"]);
    let vector = vectorize(&bag, vocabulary);

    assert_eq!(vector.len(), vocabulary.len());
    assert_eq!(vector.iter().sum::<usize>(), 3);
    let cat = vocabulary.index_of("cat").unwrap_or(usize::MAX);
    assert_eq!(vector.get(cat), Some(&2));
    Ok(())
}

#[test]
fn text_classifier_handles_raw_sentences() -> Result<()> {
    let mut classifier = TextClassifier::new(Arc::new(EnglishAnalyzer::new()?));
    classifier.train(&pets())?;
    classifier.train(&[
        LabeledDocument::new("What a wonderful, lovely puppy", "Positive"),
        LabeledDocument::new("Terrible. I hate waiting 30 minutes", "NEGATIVE"),
    ])?;

    let model = classifier.model();
    assert_eq!(model.document_count(), 5);
    assert_eq!(model.categories().collect::<Vec<_>>(), vec!["positive", "negative"]);
    assert!(!model.vocabulary().contains("30"));

    assert_eq!(classifier.predict("a lovely cat")?, "positive");
    assert_eq!(classifier.predict("I hate waiting")?, "negative");

    let posteriors = classifier.posteriors("hate")?;
    let total: f64 = posteriors.iter().map(|(_, p)| p).sum();
    assert!(approx(total, 1.0));
    Ok(())
}

#[test]
fn shared_classifier_serves_readers_across_threads() -> Result<()> {
    let shared = SharedClassifier::new(TextClassifier::new(Arc::new(EnglishAnalyzer::unicode())));
    shared.train(&pets())?;

    let readers: Vec<_> = (0..8)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                let text = if i % 2 == 0 { "love my dog" } else { "hate it" };
                shared.predict(text)
            })
        })
        .collect();

    for (i, reader) in readers.into_iter().enumerate() {
        let expected = if i % 2 == 0 { "positive" } else { "negative" };
        let predicted = reader
            .join()
            .map_err(|_| LexiclassError::other("reader thread panicked"))??;
        assert_eq!(predicted, expected);
    }
    Ok(())
}
