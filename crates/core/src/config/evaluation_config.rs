use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::domain::aggregator::{WeightTable, WeightTableError};
use crate::sentiment::infrastructure::lexicon_sentiment_analyzer::{
    LexiconError, LexiconSentimentAnalyzer,
};
use crate::shared::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_REFERENCE_TEXT};
use crate::speech::domain::recognition::RecognitionConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid weights: {0}")]
    InvalidWeights(#[from] WeightTableError),
    #[error("reference text must contain at least one word")]
    EmptyReference,
    #[error("sentiment lexicon: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Load-time configuration shared by every evaluation in the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationConfig {
    pub reference_text: String,
    pub weights: WeightTable,
    pub recognition: RecognitionConfig,
    pub lexicon_path: Option<PathBuf>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            reference_text: DEFAULT_REFERENCE_TEXT.to_string(),
            weights: WeightTable::default(),
            recognition: RecognitionConfig::default(),
            lexicon_path: None,
        }
    }
}

impl EvaluationConfig {
    /// Default location: `<config dir>/Recitation Eval/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `path` if given (it must exist), else the default location when
    /// present, else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path),
                None => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_text.trim().is_empty() {
            return Err(ConfigError::EmptyReference);
        }
        self.weights.validate()?;
        Ok(())
    }

    /// AFINN analyzer, extended by `lexicon_path` when set.
    pub fn sentiment_analyzer(&self) -> Result<LexiconSentimentAnalyzer, ConfigError> {
        match &self.lexicon_path {
            Some(path) => Ok(LexiconSentimentAnalyzer::with_lexicon_file(path)?),
            None => Ok(LexiconSentimentAnalyzer::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::domain::recognition::AudioEncoding;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = EvaluationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reference_text, DEFAULT_REFERENCE_TEXT);
        assert_eq!(config.recognition.encoding, AudioEncoding::Linear16);
        assert_eq!(config.recognition.language_code, "en-US");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{"referenceText": "to be or not to be"}"#);
        let config = EvaluationConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.reference_text, "to be or not to be");
        assert_eq!(config.weights, WeightTable::default());
        assert!(config.lexicon_path.is_none());
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"{
                "referenceText": "hello world",
                "weights": {"accuracy": 0.5, "hesitationRate": 0.1,
                            "pronunciationAccuracy": 0.3, "expressionScore": 0.1},
                "recognition": {"encoding": "LINEAR16", "languageCode": "en-GB",
                                "sampleRateHertz": 8000},
                "lexiconPath": "/tmp/lexicon.json"
            }"#,
        );
        let config = EvaluationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.weights.accuracy, 0.5);
        assert_eq!(config.recognition.sample_rate_hertz, 8000);
        assert_eq!(config.lexicon_path, Some(PathBuf::from("/tmp/lexicon.json")));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let file = write_config(
            r#"{"weights": {"accuracy": 0.4, "hesitationRate": 0.4,
                            "pronunciationAccuracy": 0.2, "expressionScore": 0.2}}"#,
        );
        let err = EvaluationConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWeights(WeightTableError::BadSum(_))
        ));
    }

    #[test]
    fn test_unknown_weight_key_rejected() {
        let file = write_config(
            r#"{"weights": {"accuracy": 0.4, "hesitationRate": 0.2, "fluency": 0.0,
                            "pronunciationAccuracy": 0.2, "expressionScore": 0.2}}"#,
        );
        let err = EvaluationConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_empty_reference_rejected() {
        let file = write_config(r#"{"referenceText": "   "}"#);
        let err = EvaluationConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyReference));
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let file = write_config(r#"{"recognition": {"encoding": "MP3"}}"#);
        assert!(matches!(
            EvaluationConfig::from_file(file.path()).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let err = EvaluationConfig::load(Some(Path::new("/nonexistent/config.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = EvaluationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"referenceText\""));
        assert!(json.contains("\"LINEAR16\""));
        let parsed: EvaluationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_sentiment_analyzer_without_lexicon_path() {
        let analyzer = EvaluationConfig::default().sentiment_analyzer().unwrap();
        assert!(!analyzer.is_empty());
    }

    #[test]
    fn test_sentiment_analyzer_extends_from_lexicon_path() {
        let lexicon = write_config(r#"{"recite": 2}"#);
        let config = EvaluationConfig {
            lexicon_path: Some(lexicon.path().to_path_buf()),
            ..EvaluationConfig::default()
        };
        let base = EvaluationConfig::default().sentiment_analyzer().unwrap();
        assert_eq!(config.sentiment_analyzer().unwrap().len(), base.len() + 1);
    }

    #[test]
    fn test_bad_lexicon_surfaces_as_config_error() {
        let lexicon = write_config(r#"{"ecstatic": 9}"#);
        let config = EvaluationConfig {
            lexicon_path: Some(lexicon.path().to_path_buf()),
            ..EvaluationConfig::default()
        };
        let err = config.sentiment_analyzer().err().unwrap();
        assert!(matches!(err, ConfigError::Lexicon(LexiconError::Valence { .. })));

        let missing = EvaluationConfig {
            lexicon_path: Some(PathBuf::from("/nonexistent/lexicon.json")),
            ..EvaluationConfig::default()
        };
        let err = missing.sentiment_analyzer().err().unwrap();
        assert!(matches!(err, ConfigError::Lexicon(LexiconError::Read { .. })));
    }
}
