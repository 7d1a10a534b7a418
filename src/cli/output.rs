//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::classifier::{CategoryStats, Evaluation};
use crate::cli::args::{LexiclassArgs, OutputFormat};
use crate::error::Result;

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Training statistics of a dataset.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsReport {
    pub documents: usize,
    pub vocabulary_size: usize,
    pub smoothing: f64,
    pub categories: Vec<CategoryReport>,
}

/// Statistics of one category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryReport {
    #[serde(flatten)]
    pub stats: CategoryStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_words: Option<Vec<WordProbability>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordProbability {
    pub word: String,
    pub probability: f64,
}

/// Categories in training order.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

/// Result of classifying one text.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    /// The classified text, or where it was read from.
    pub input: String,
    pub tokens: Vec<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posteriors: Option<Vec<CategoryProbability>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryProbability {
    pub category: String,
    pub probability: f64,
}

/// Accuracy against a test dataset.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub training_documents: usize,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

/// Bag-of-words vector of a text.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorizeResult {
    pub text: String,
    pub vocabulary: Vec<String>,
    pub vector: Vec<usize>,
}

impl HumanOutput for StatsReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Model Statistics:")?;
        writeln!(out, "═════════════════")?;
        writeln!(out, "Training documents: {}", self.documents)?;
        writeln!(out, "Vocabulary size: {}", self.vocabulary_size)?;
        writeln!(out, "Smoothing: {}", self.smoothing)?;

        for category in &self.categories {
            let stats = &category.stats;
            writeln!(out)?;
            writeln!(out, "{}", stats.category)?;
            writeln!(out, "─────────────")?;
            writeln!(out, "  Documents: {}", stats.documents)?;
            writeln!(out, "  Prior: {:.4}", stats.prior)?;
            writeln!(out, "  Total words: {}", stats.total_words)?;
            writeln!(out, "  Distinct words: {}", stats.distinct_words)?;

            if let Some(words) = &category.top_words {
                writeln!(out, "  Top words:")?;
                for word in words {
                    writeln!(out, "    {} ({:.4})", word.word, word.probability)?;
                }
            }
        }
        Ok(())
    }
}

impl HumanOutput for CategoryList {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for category in &self.categories {
            writeln!(out, "{category}")?;
        }
        Ok(())
    }
}

impl HumanOutput for PredictionResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.category)?;
        if let Some(posteriors) = &self.posteriors {
            for posterior in posteriors {
                writeln!(out, "  {}: {:.4}", posterior.category, posterior.probability)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for EvaluationReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Evaluation:")?;
        writeln!(out, "═══════════")?;
        writeln!(out, "Training documents: {}", self.training_documents)?;
        writeln!(out, "Test documents: {}", self.evaluation.total)?;
        writeln!(out, "Correct: {}", self.evaluation.correct)?;
        writeln!(out, "Accuracy: {:.2}%", self.evaluation.accuracy * 100.0)
    }
}

impl HumanOutput for VectorizeResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for (word, count) in self.vocabulary.iter().zip(&self.vector) {
            if *count > 0 {
                writeln!(out, "{word}: {count}")?;
            }
        }
        let vector: Vec<String> = self.vector.iter().map(|c| c.to_string()).collect();
        writeln!(out, "[{}]", vector.join(", "))
    }
}

/// Output a result to stdout in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &LexiclassArgs,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Output a result to `out` in the format selected on the command line.
pub fn write_result<T: Serialize + HumanOutput>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &LexiclassArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}
