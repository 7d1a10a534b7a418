//! Word readers for strings, files and interactive input.
//!
//! A [`WordReader`] wraps an analyzer and turns text from several sources into
//! the token sequences the classifier consumes.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::error::Result;

/// Reads word tokens from strings, files and stdin.
///
/// ```
/// use lexiclass::analysis::WordReader;
///
/// let reader = WordReader::default();
/// let words = reader.parse_words("# # # whoa... # # # whoa... ### get out!!!").unwrap();
/// assert_eq!(words, vec!["whoa", "whoa"]);
/// ```
#[derive(Clone)]
pub struct WordReader {
    analyzer: Arc<dyn Analyzer>,
}

impl WordReader {
    /// Create a reader backed by the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }

    /// The analyzer this reader tokenizes with.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Parse the word tokens out of a string.
    pub fn parse_words(&self, text: &str) -> Result<Vec<String>> {
        self.analyzer.analyze_words(text)
    }

    /// Read word tokens from any buffered source, one line at a time.
    pub fn read_words<R: BufRead>(&self, reader: R) -> Result<Vec<String>> {
        let mut words = Vec::new();
        for line in reader.lines() {
            words.extend(self.parse_words(&line?)?);
        }
        Ok(words)
    }

    /// Read word tokens from a file.
    pub fn read_file_words<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        debug!("reading words from {}", path.display());
        let file = File::open(path)?;
        self.read_words(BufReader::new(file))
    }

    /// Print `prompt`, read one line from stdin and parse its word tokens.
    pub fn read_user_input_words(&self, prompt: &str) -> Result<Vec<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        self.parse_words(&line)
    }
}

impl Default for WordReader {
    fn default() -> Self {
        Self::new(Arc::new(EnglishAnalyzer::default()))
    }
}

impl std::fmt::Debug for WordReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordReader")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
