use super::evaluation_error::EvaluationError;

/// Positional, case-insensitive word comparator.
///
/// Both texts are split on single spaces, so consecutive spaces yield empty
/// words. Word `i` of the candidate is only ever compared with word `i` of the
/// reference: an inserted or dropped word shifts every later position.
pub struct TextAligner;

impl TextAligner {
    /// Percentage of reference positions whose candidate word matches.
    ///
    /// Missing candidate positions and empty candidate words count as
    /// mismatches. Candidate words past the reference length are ignored.
    pub fn align(reference: &str, candidate: &str) -> Result<f64, EvaluationError> {
        if reference.trim().is_empty() {
            return Err(EvaluationError::invalid("reference text has no words"));
        }

        let reference_words: Vec<&str> = reference.split(' ').collect();
        let candidate_words: Vec<&str> = candidate.split(' ').collect();

        let matches = reference_words
            .iter()
            .enumerate()
            .filter(|(i, expected)| match candidate_words.get(*i) {
                Some(actual) if !actual.is_empty() => {
                    actual.to_lowercase() == expected.to_lowercase()
                }
                _ => false,
            })
            .count();

        Ok(matches as f64 / reference_words.len() as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const REFERENCE: &str = "it was anxious to find him";

    #[test]
    fn test_identical_text_scores_full() {
        let score = TextAligner::align(REFERENCE, REFERENCE).unwrap();
        assert_relative_eq!(score, 100.0);
    }

    #[test]
    fn test_case_is_ignored() {
        let score = TextAligner::align(REFERENCE, "It Was ANXIOUS to Find him").unwrap();
        assert_relative_eq!(score, 100.0);
    }

    #[test]
    fn test_single_substitution() {
        let score = TextAligner::align(REFERENCE, "it was eager to find him").unwrap();
        assert_relative_eq!(score, 500.0 / 6.0, epsilon = 1e-9);
        assert_eq!(format!("{score:.2}"), "83.33");
    }

    #[test]
    fn test_shorter_candidate_counts_missing_as_mismatch() {
        let score = TextAligner::align(REFERENCE, "it was anxious").unwrap();
        assert_relative_eq!(score, 50.0);
    }

    #[test]
    fn test_longer_candidate_ignores_extra_words() {
        let score =
            TextAligner::align(REFERENCE, "it was anxious to find him again and again").unwrap();
        assert_relative_eq!(score, 100.0);
    }

    #[test]
    fn test_inserted_word_shifts_every_later_position() {
        let score = TextAligner::align(REFERENCE, "it was very anxious to find him").unwrap();
        assert_relative_eq!(score, 200.0 / 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reordering_drops_below_full() {
        let score = TextAligner::align(REFERENCE, "was it anxious to find him").unwrap();
        assert!(score < 100.0);
    }

    #[test]
    fn test_double_space_produces_empty_word_mismatch() {
        // "it  was" splits into ["it", "", "was"], misaligning everything after "it".
        let score = TextAligner::align("it was", "it  was").unwrap();
        assert_relative_eq!(score, 50.0);
    }

    #[test]
    fn test_empty_reference_positions_never_match_empty_candidate() {
        let score = TextAligner::align("a  b", "a  b").unwrap();
        assert_relative_eq!(score, 200.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let score = TextAligner::align(REFERENCE, "").unwrap();
        assert_relative_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_reference_is_invalid() {
        let err = TextAligner::align("", "anything").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(TextAligner::align("   ", "anything").is_err());
    }

    #[test]
    fn test_score_always_within_bounds() {
        let candidates = [
            "",
            "x",
            "it",
            "him find to anxious was it",
            REFERENCE,
            "a b c d e f g h i",
        ];
        for candidate in candidates {
            let score = TextAligner::align(REFERENCE, candidate).unwrap();
            assert!((0.0..=100.0).contains(&score), "{candidate:?} scored {score}");
        }
    }
}
