//! Loading labeled training data from disk.
//!
//! Two layouts are accepted, both made of `{"text": ..., "label": ...}`
//! objects:
//!
//! - a JSON array (`*.json` or any other extension)
//! - JSON Lines, one object per line (`*.jsonl`, `*.ndjson`); blank lines
//!   are skipped

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use log::{debug, info};

use crate::classifier::LabeledDocument;
use crate::error::{LexiclassError, Result};

/// Load labeled documents from a JSON or JSON Lines file.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledDocument>> {
    let path = path.as_ref();
    let documents = if is_json_lines(path) {
        let file = File::open(path)
            .with_context(|| format!("failed to open dataset {}", path.display()))?;
        read_json_lines(BufReader::new(file))
            .with_context(|| format!("failed to read dataset {}", path.display()))?
    } else {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to open dataset {}", path.display()))?;
        parse_json_array(&content)
            .with_context(|| format!("failed to read dataset {}", path.display()))?
    };

    validate(&documents)?;
    info!(
        "loaded {} labeled documents from {}",
        documents.len(),
        path.display()
    );
    Ok(documents)
}

fn is_json_lines(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson"))
}

/// Parse a JSON array of labeled documents.
pub fn parse_json_array(content: &str) -> anyhow::Result<Vec<LabeledDocument>> {
    serde_json::from_str(content).context("expected a JSON array of {\"text\", \"label\"} objects")
}

/// Read labeled documents from JSON Lines.
pub fn read_json_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<LabeledDocument>> {
    let mut documents = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("line {}", line_num + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let document: LabeledDocument = serde_json::from_str(&line)
            .with_context(|| format!("invalid document on line {}", line_num + 1))?;
        documents.push(document);
    }
    debug!("parsed {} JSON Lines records", documents.len());
    Ok(documents)
}

/// Reject documents without a usable label.
fn validate(documents: &[LabeledDocument]) -> Result<()> {
    match documents
        .iter()
        .position(|document| document.label.trim().is_empty())
    {
        Some(index) => Err(LexiclassError::dataset(format!(
            "document {} has an empty label",
            index + 1
        ))),
        None => Ok(()),
    }
}
