//! Command line argument parsing for the Lexiclass CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::classifier::ClassifierConfig;

/// Lexiclass - A multinomial Naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiclass")]
#[command(about = "A multinomial Naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexiclassArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Lidstone smoothing constant (1.0 is Laplace smoothing)
    #[arg(short = 'k', long, default_value_t = 1.0, env = "LEXICLASS_SMOOTHING", global = true)]
    pub smoothing: f64,

    /// Tokenizer used by the text analysis pipeline
    #[arg(short, long, default_value = "english", global = true)]
    pub tokenizer: TokenizerKind,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiclassArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity. Training summaries are logged at
    /// info, so they show from `-vv` on; `-vvv` adds per-run debug detail.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig::with_smoothing(self.smoothing)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on a dataset and show per-category statistics
    Stats(StatsArgs),

    /// Train on a dataset and list its categories
    Categories(DatasetArgs),

    /// Classify text with a model trained on a dataset
    Predict(PredictArgs),

    /// Measure accuracy on a held-out dataset
    Evaluate(EvaluateArgs),

    /// Print the bag-of-words vector of a text over the training vocabulary
    Vectorize(VectorizeArgs),
}

/// Training dataset shared by every command
#[derive(Parser, Debug, Clone)]
pub struct DatasetArgs {
    /// Training data (JSON array or JSON Lines of {"text", "label"})
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub data: DatasetArgs,

    /// Also list the most likely words of each category
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,
}

/// Arguments for predicting
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub data: DatasetArgs,

    /// Text to classify
    #[arg(value_name = "TEXT", conflicts_with_all = ["file", "interactive"])]
    pub text: Option<String>,

    /// Classify the contents of a file
    #[arg(long, value_name = "FILE", conflicts_with = "interactive")]
    pub file: Option<PathBuf>,

    /// Prompt for text on stdin until a line without words
    #[arg(short, long)]
    pub interactive: bool,

    /// Show the posterior probability of every category
    #[arg(long)]
    pub posteriors: bool,
}

/// Arguments for evaluating
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub data: DatasetArgs,

    /// Labeled documents to score the trained model against
    #[arg(value_name = "TEST_DATASET")]
    pub test_dataset: PathBuf,
}

/// Arguments for vectorizing
#[derive(Parser, Debug, Clone)]
pub struct VectorizeArgs {
    #[command(flatten)]
    pub data: DatasetArgs,

    /// Text to vectorize
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Tokenizers selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// `\w+` runs
    English,
    /// Unicode word boundaries
    Unicode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_predict_command() {
        let args = LexiclassArgs::try_parse_from([
            "lexiclass",
            "predict",
            "train.json",
            "I love my cat",
            "--posteriors",
        ])
        .unwrap();

        if let Command::Predict(predict_args) = args.command {
            assert_eq!(predict_args.data.dataset, PathBuf::from("train.json"));
            assert_eq!(predict_args.text.as_deref(), Some("I love my cat"));
            assert!(predict_args.posteriors);
            assert!(!predict_args.interactive);
        } else {
            panic!("Expected Predict command");
        }
    }

    #[test]
    fn test_predict_sources_conflict() {
        let result = LexiclassArgs::try_parse_from([
            "lexiclass",
            "predict",
            "train.json",
            "some text",
            "--interactive",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_evaluate_command() {
        let args =
            LexiclassArgs::try_parse_from(["lexiclass", "evaluate", "train.jsonl", "test.jsonl"])
                .unwrap();

        if let Command::Evaluate(evaluate_args) = args.command {
            assert_eq!(evaluate_args.data.dataset, PathBuf::from("train.jsonl"));
            assert_eq!(evaluate_args.test_dataset, PathBuf::from("test.jsonl"));
        } else {
            panic!("Expected Evaluate command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = LexiclassArgs::try_parse_from(["lexiclass", "categories", "d.json"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            LexiclassArgs::try_parse_from(["lexiclass", "-vv", "categories", "d.json"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            LexiclassArgs::try_parse_from(["lexiclass", "--quiet", "categories", "d.json"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_log_levels() {
        let level = |argv: &[&str]| LexiclassArgs::try_parse_from(argv).unwrap().log_level();

        assert_eq!(level(&["lexiclass", "categories", "d.json"]), LevelFilter::Warn);
        assert_eq!(level(&["lexiclass", "-q", "categories", "d.json"]), LevelFilter::Error);
        assert_eq!(level(&["lexiclass", "-v", "categories", "d.json"]), LevelFilter::Warn);
        assert_eq!(level(&["lexiclass", "-vv", "categories", "d.json"]), LevelFilter::Info);
        assert_eq!(level(&["lexiclass", "-vvv", "categories", "d.json"]), LevelFilter::Debug);
    }

    #[test]
    fn test_global_options() {
        let args = LexiclassArgs::try_parse_from([
            "lexiclass",
            "stats",
            "d.json",
            "--format",
            "json",
            "--smoothing",
            "0.5",
            "--tokenizer",
            "unicode",
            "--top-words",
            "3",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.smoothing, 0.5);
        assert_eq!(args.tokenizer, TokenizerKind::Unicode);
        assert_eq!(args.classifier_config().smoothing, 0.5);
        if let Command::Stats(stats_args) = args.command {
            assert_eq!(stats_args.top_words, Some(3));
        } else {
            panic!("Expected Stats command");
        }
    }
}
