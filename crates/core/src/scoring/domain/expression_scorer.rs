use super::evaluation_error::EvaluationError;
use crate::sentiment::domain::sentiment_analyzer::SentimentAnalyzer;

/// Forwards transcript text to a sentiment analyzer and returns its raw score.
///
/// The score is not rescaled, so it can fall outside the 0-100 range of the
/// other sub-metrics.
pub struct ExpressionScorer<'a> {
    analyzer: &'a dyn SentimentAnalyzer,
}

impl<'a> ExpressionScorer<'a> {
    pub fn new(analyzer: &'a dyn SentimentAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn score(&self, text: &str) -> Result<f64, EvaluationError> {
        let analysis = self
            .analyzer
            .analyze(text)
            .map_err(|e| EvaluationError::upstream("sentiment analysis", e))?;
        Ok(analysis.score)
    }
}
