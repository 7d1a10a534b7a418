//! Configuration for the Naive Bayes classifier.

use serde::{Deserialize, Serialize};

use crate::error::{LexiclassError, Result};

/// Default Lidstone smoothing constant (Laplace smoothing).
pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Classifier configuration.
///
/// ```
/// use lexiclass::classifier::ClassifierConfig;
///
/// let config = ClassifierConfig::default();
/// assert_eq!(config.smoothing, 1.0);
///
/// let lidstone = ClassifierConfig::with_smoothing(0.5);
/// assert!(lidstone.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Additive smoothing constant k; 1.0 is Laplace smoothing.
    pub smoothing: f64,
}

impl ClassifierConfig {
    pub fn with_smoothing(smoothing: f64) -> Self {
        Self { smoothing }
    }

    /// Check that the configuration yields strictly positive likelihoods.
    pub fn validate(&self) -> Result<()> {
        validate_smoothing(self.smoothing)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

pub(crate) fn validate_smoothing(k: f64) -> Result<()> {
    if k.is_finite() && k > 0.0 {
        Ok(())
    } else {
        Err(LexiclassError::invalid_config(format!(
            "smoothing constant must be finite and greater than zero, got {k}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(ClassifierConfig::default().validate().is_ok());
        assert!(ClassifierConfig::with_smoothing(0.01).validate().is_ok());
        assert!(ClassifierConfig::with_smoothing(0.0).validate().is_err());
        assert!(ClassifierConfig::with_smoothing(-1.0).validate().is_err());
        assert!(ClassifierConfig::with_smoothing(f64::NAN).validate().is_err());
        assert!(ClassifierConfig::with_smoothing(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ClassifierConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClassifierConfig::default());

        let config: ClassifierConfig = serde_json::from_str(r#"{"smoothing": 0.5}"#).unwrap();
        assert_eq!(config.smoothing, 0.5);
    }
}
