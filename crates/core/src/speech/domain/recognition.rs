use serde::{Deserialize, Serialize};

use crate::shared::constants::{DEFAULT_LANGUAGE_CODE, WHISPER_SAMPLE_RATE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioEncoding {
    /// 16-bit signed little-endian PCM, as a WAV file or headerless samples.
    #[serde(rename = "LINEAR16")]
    Linear16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecognitionConfig {
    pub encoding: AudioEncoding,
    pub language_code: String,
    /// Sample rate of headerless audio. WAV input carries its own.
    pub sample_rate_hertz: u32,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            encoding: AudioEncoding::Linear16,
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            sample_rate_hertz: WHISPER_SAMPLE_RATE,
        }
    }
}

impl RecognitionConfig {
    /// Primary language subtag, e.g. `"en"` for `"en-US"`.
    pub fn language(&self) -> &str {
        self.language_code
            .split(['-', '_'])
            .next()
            .unwrap_or(&self.language_code)
    }
}

/// Audio submitted for recognition together with how to interpret it.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub content: Vec<u8>,
    pub config: RecognitionConfig,
}

impl AudioPayload {
    pub fn new(content: Vec<u8>, config: RecognitionConfig) -> Self {
        Self { content, config }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionAlternative {
    pub transcript: String,
    pub confidence: f32,
}

/// One recognized span of speech. Alternatives are ordered best first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResult {
    pub alternatives: Vec<RecognitionAlternative>,
}

impl RecognitionResult {
    pub fn top(&self) -> Option<&RecognitionAlternative> {
        self.alternatives.first()
    }
}

/// Joins the top alternative of each result with newlines.
pub fn transcript_from_results(results: &[RecognitionResult]) -> String {
    results
        .iter()
        .filter_map(|r| r.top())
        .map(|alt| alt.transcript.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
