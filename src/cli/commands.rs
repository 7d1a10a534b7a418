//! Command implementations for the Lexiclass CLI.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::analysis::WordReader;
use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::classifier::{SmoothedLikelihoods, TextClassifier, WordBag, vectorize};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dataset::load_training_data;
use crate::error::{LexiclassError, Result};

/// Execute a CLI command.
pub fn execute_command(args: LexiclassArgs) -> Result<()> {
    match &args.command {
        Command::Stats(stats_args) => show_stats(stats_args, &args),
        Command::Categories(data_args) => list_categories(data_args, &args),
        Command::Predict(predict_args) => predict(predict_args, &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, &args),
        Command::Vectorize(vectorize_args) => vectorize_text(vectorize_args, &args),
    }
}

/// Build the analyzer selected on the command line.
pub fn build_analyzer(kind: TokenizerKind) -> Result<Arc<dyn Analyzer>> {
    Ok(match kind {
        TokenizerKind::English => Arc::new(EnglishAnalyzer::new()?),
        TokenizerKind::Unicode => Arc::new(EnglishAnalyzer::unicode()),
    })
}

/// Load `dataset` and train a classifier on it.
pub fn train_classifier(dataset: &Path, cli_args: &LexiclassArgs) -> Result<TextClassifier> {
    let analyzer = build_analyzer(cli_args.tokenizer)?;
    let mut classifier = TextClassifier::with_config(analyzer, cli_args.classifier_config())?;

    let documents = load_training_data(dataset)?;
    classifier.train(&documents)?;
    info!(
        "trained {} categories from {}",
        classifier.model().categories().count(),
        dataset.display()
    );
    Ok(classifier)
}

fn top_words(table: &SmoothedLikelihoods, n: usize) -> Vec<WordProbability> {
    let mut words: Vec<(&str, f64)> = table.iter().collect();
    words.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    words
        .into_iter()
        .take(n)
        .map(|(word, probability)| WordProbability {
            word: word.to_string(),
            probability,
        })
        .collect()
}

/// Show per-category training statistics.
fn show_stats(args: &StatsArgs, cli_args: &LexiclassArgs) -> Result<()> {
    let classifier = train_classifier(&args.data.dataset, cli_args)?;
    let model = classifier.model();

    let categories = model
        .category_stats()
        .into_iter()
        .map(|stats| {
            let top_words = match (args.top_words, model.likelihoods(&stats.category)) {
                (Some(n), Some(table)) => Some(top_words(table, n)),
                _ => None,
            };
            CategoryReport { stats, top_words }
        })
        .collect();

    output_result(
        "Model trained",
        &StatsReport {
            documents: model.document_count(),
            vocabulary_size: model.vocabulary().len(),
            smoothing: model.smoothing(),
            categories,
        },
        cli_args,
    )
}

/// List categories in training order.
fn list_categories(args: &DatasetArgs, cli_args: &LexiclassArgs) -> Result<()> {
    let classifier = train_classifier(&args.dataset, cli_args)?;
    let categories = classifier
        .model()
        .categories()
        .map(str::to_string)
        .collect();

    output_result("Categories", &CategoryList { categories }, cli_args)
}

/// Classify already tokenized input.
fn classify(
    classifier: &TextClassifier,
    input: String,
    tokens: Vec<String>,
    with_posteriors: bool,
) -> Result<PredictionResult> {
    let model = classifier.model();
    let category = model.predict(&tokens)?.to_string();
    let posteriors = if with_posteriors {
        Some(
            model
                .posteriors(&tokens)?
                .into_iter()
                .map(|(category, probability)| CategoryProbability {
                    category: category.to_string(),
                    probability,
                })
                .collect(),
        )
    } else {
        None
    };

    Ok(PredictionResult {
        input,
        tokens,
        category,
        posteriors,
    })
}

/// Classify text given inline, read from a file, or typed at a prompt.
fn predict(args: &PredictArgs, cli_args: &LexiclassArgs) -> Result<()> {
    let classifier = train_classifier(&args.data.dataset, cli_args)?;
    let reader = WordReader::new(Arc::clone(classifier.analyzer()));

    if args.interactive {
        loop {
            let tokens = reader.read_user_input_words("> ")?;
            if tokens.is_empty() {
                debug!("no words entered, leaving interactive mode");
                return Ok(());
            }
            let input = tokens.join(" ");
            let result = classify(&classifier, input, tokens, args.posteriors)?;
            output_result("Prediction", &result, cli_args)?;
        }
    }

    let (input, tokens) = match (&args.text, &args.file) {
        (Some(text), _) => (text.clone(), reader.parse_words(text)?),
        (None, Some(file)) => (file.display().to_string(), reader.read_file_words(file)?),
        (None, None) => {
            return Err(LexiclassError::invalid_argument(
                "nothing to classify: pass TEXT, --file or --interactive",
            ));
        }
    };

    let result = classify(&classifier, input, tokens, args.posteriors)?;
    output_result("Prediction", &result, cli_args)
}

/// Train on one dataset and score another.
fn evaluate(args: &EvaluateArgs, cli_args: &LexiclassArgs) -> Result<()> {
    let classifier = train_classifier(&args.data.dataset, cli_args)?;
    let test_documents = load_training_data(&args.test_dataset)?;
    let evaluation = classifier.evaluate(&test_documents)?;

    output_result(
        "Evaluation finished",
        &EvaluationReport {
            training_documents: classifier.model().document_count(),
            evaluation,
        },
        cli_args,
    )
}

/// Vectorize text against the training vocabulary.
fn vectorize_text(args: &VectorizeArgs, cli_args: &LexiclassArgs) -> Result<()> {
    let classifier = train_classifier(&args.data.dataset, cli_args)?;
    let vocabulary = classifier.model().vocabulary();
    let bag = WordBag::from_tokens(classifier.tokenize(&args.text)?);

    output_result(
        "Vectorized",
        &VectorizeResult {
            text: args.text.clone(),
            vocabulary: vocabulary.words().to_vec(),
            vector: vectorize(&bag, vocabulary),
        },
        cli_args,
    )
}
