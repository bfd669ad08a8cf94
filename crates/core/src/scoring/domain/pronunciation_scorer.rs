use super::evaluation_error::EvaluationError;
use super::phonetic_encoder::PhoneticEncoder;

/// Positional comparison of phonetic codes.
///
/// Words are split on whitespace runs (not single spaces, unlike
/// [`TextAligner`](super::text_aligner::TextAligner)), so "Robert" read as
/// "Rupert" still counts as correctly pronounced.
pub struct PronunciationScorer;

impl PronunciationScorer {
    pub fn score(reference: &str, candidate: &str) -> Result<f64, EvaluationError> {
        let reference_codes = encode_words(reference)?;
        if reference_codes.is_empty() {
            return Err(EvaluationError::invalid("reference text has no words"));
        }
        let candidate_codes = encode_words(candidate)?;

        let matches = reference_codes
            .iter()
            .enumerate()
            .filter(|(i, expected)| candidate_codes.get(*i) == Some(*expected))
            .count();

        Ok(matches as f64 / reference_codes.len() as f64 * 100.0)
    }
}

fn encode_words(text: &str) -> Result<Vec<String>, EvaluationError> {
    text.split_whitespace().map(PhoneticEncoder::encode).collect()
}
