use once_cell::sync::Lazy;
use regex::Regex;

use super::evaluation_error::EvaluationError;

/// Verbal hesitation markers. Matched against single tokens only, so the
/// two-word entry can never match.
pub const FILLER_WORDS: &[&str] = &["uh", "ah", "aa", "um", "like", "you know", "well"];

/// Minimum run of pause tokens counted toward hesitation.
pub const PAUSE_DURATION_THRESHOLD: f64 = 1.5;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Measures filler-word and pause density in transcript text.
pub struct HesitationDetector;

impl HesitationDetector {
    pub fn detect(text: &str) -> Result<f64, EvaluationError> {
        let words = tokenize(text);
        if words.is_empty() {
            return Err(EvaluationError::invalid("transcript has no words"));
        }

        let hesitation_count = words
            .iter()
            .filter(|w| FILLER_WORDS.contains(&w.as_str()))
            .count();
        let total_pause_duration = pause_duration(&words);
        let word_count = words.len() as f64;

        log::debug!(
            "Hesitation: {hesitation_count} fillers, {total_pause_duration} pause tokens, {} words",
            words.len()
        );

        Ok((hesitation_count as f64 + total_pause_duration / word_count) / word_count * 100.0)
    }
}

/// Lowercased word tokens with punctuation and whitespace removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Total length of pause runs that reach the threshold.
///
/// A pause token is one that trims to nothing. The word tokenizer never emits
/// such tokens, so for tokenized text this is always zero.
fn pause_duration(words: &[String]) -> f64 {
    let mut total = 0.0;
    let mut pause_start: Option<usize> = None;

    for (index, word) in words.iter().enumerate() {
        let is_pause = word.trim().is_empty();
        match (is_pause, pause_start) {
            (true, None) => pause_start = Some(index),
            (false, Some(start)) => {
                pause_start = None;
                let duration = (index - start) as f64;
                if duration >= PAUSE_DURATION_THRESHOLD {
                    total += duration;
                }
            }
            _ => {}
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tokenize_strips_punctuation_and_case() {
        assert_eq!(
            tokenize("Well, UM... it was -- anxious!"),
            vec!["well", "um", "it", "was", "anxious"]
        );
    }

    #[test]
    fn test_no_fillers_scores_zero() {
        let rate = HesitationDetector::detect("it was anxious to find him").unwrap();
        assert_relative_eq!(rate, 0.0);
    }

    #[test]
    fn test_filler_density() {
        // 2 fillers out of 8 tokens.
        let rate = HesitationDetector::detect("um it was uh anxious to find him").unwrap();
        assert_relative_eq!(rate, 25.0);
    }

    #[test]
    fn test_fillers_match_after_punctuation_removal() {
        let rate = HesitationDetector::detect("Well, like, UM.").unwrap();
        assert_relative_eq!(rate, 100.0);
    }

    #[test]
    fn test_two_word_filler_is_never_matched() {
        let rate = HesitationDetector::detect("you know it was").unwrap();
        assert_relative_eq!(rate, 0.0);
    }

    #[test]
    fn test_newlines_between_results_are_word_separators() {
        let rate = HesitationDetector::detect("it was\num anxious").unwrap();
        assert_relative_eq!(rate, 25.0);
    }

    #[test]
    fn test_empty_text_is_invalid() {
        assert!(HesitationDetector::detect("").unwrap_err().is_invalid_input());
        assert!(HesitationDetector::detect("  ... !!").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_rate_is_non_negative() {
        for text in ["a", "um", "uh uh uh", "the quick brown fox", "like well aa ah"] {
            assert!(HesitationDetector::detect(text).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_pause_duration_zero_for_tokenized_text() {
        assert_relative_eq!(pause_duration(&tokenize("um, it was... anxious")), 0.0);
    }

    #[test]
    fn test_pause_duration_counts_runs_over_threshold() {
        let words = tokens(&["a", "", " ", "b", "", "c"]);
        // The run of two empty tokens reaches the threshold; the single one does not.
        assert_relative_eq!(pause_duration(&words), 2.0);
    }

    #[test]
    fn test_pause_run_at_end_is_not_closed() {
        let words = tokens(&["a", "", "", ""]);
        assert_relative_eq!(pause_duration(&words), 0.0);
    }
}
