use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::sentiment::domain::sentiment_analyzer::{SentimentAnalysis, SentimentAnalyzer};

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid lexicon {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("valence for '{word}' must be between -5 and 5, got {valence}")]
    Valence { word: String, valence: i32 },
}

/// Words that flip the valence of the token right after them.
pub const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "isn't", "wasn't", "can't", "won't", "didn't", "doesn't",
    "aren't", "weren't", "shouldn't", "wouldn't", "couldn't", "cannot", "nor", "neither",
];

/// AFINN-165 word valences.
static AFINN_165: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    serde_json::from_str(include_str!("afinn_165.json")).expect("embedded AFINN-165 lexicon")
});

/// Punctuation stripped before splitting; apostrophes and hyphens stay word-internal.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s'-]|_").unwrap());

/// Sums per-word valences from an AFINN-style lexicon.
///
/// A valence is negated when the preceding token is one of [`NEGATORS`].
pub struct LexiconSentimentAnalyzer {
    lexicon: HashMap<String, i32>,
}

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: AFINN_165.clone(),
        }
    }

    /// Built-in lexicon extended (and overridden) by a JSON `{"word": valence}` file.
    pub fn with_lexicon_file(path: &Path) -> Result<Self, LexiconError> {
        let json = fs::read_to_string(path).map_err(|e| LexiconError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let extra: HashMap<String, i32> =
            serde_json::from_str(&json).map_err(|e| LexiconError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut analyzer = Self::new();
        for (word, valence) in extra {
            analyzer.insert(&word, valence)?;
        }
        log::debug!(
            "Loaded sentiment lexicon from {} ({} words)",
            path.display(),
            analyzer.len()
        );
        Ok(analyzer)
    }

    pub fn insert(&mut self, word: &str, valence: i32) -> Result<(), LexiconError> {
        if !(-5..=5).contains(&valence) {
            return Err(LexiconError::Valence {
                word: word.to_string(),
                valence,
            });
        }
        self.lexicon.insert(word.to_lowercase(), valence);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn score_tokens(&self, tokens: &[String]) -> SentimentAnalysis {
        let mut analysis = SentimentAnalysis::default();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.lexicon.get(token) else {
                continue;
            };
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            let valence = if negated { -valence } else { valence };

            analysis.score += valence as f64;
            if valence > 0 {
                analysis.positive.push(token.clone());
            } else if valence < 0 {
                analysis.negative.push(token.clone());
            }
        }

        if !tokens.is_empty() {
            analysis.comparative = analysis.score / tokens.len() as f64;
        }
        analysis
    }
}

impl Default for LexiconSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<SentimentAnalysis, Box<dyn std::error::Error>> {
        Ok(self.score_tokens(&tokenize(text)))
    }
}

/// Lowercase, delete punctuation, split on whitespace.
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    PUNCTUATION
        .replace_all(&lower, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
