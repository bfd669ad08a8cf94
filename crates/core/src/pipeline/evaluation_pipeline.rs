use crate::config::evaluation_config::EvaluationConfig;
use crate::scoring::domain::aggregator::{Aggregator, SubMetrics, WeightTable};
use crate::scoring::domain::evaluation_error::EvaluationError;
use crate::scoring::domain::evaluation_result::EvaluationResult;
use crate::scoring::domain::expression_scorer::ExpressionScorer;
use crate::scoring::domain::grade_classifier::GradeClassifier;
use crate::scoring::domain::hesitation_detector::HesitationDetector;
use crate::scoring::domain::pronunciation_scorer::PronunciationScorer;
use crate::scoring::domain::text_aligner::TextAligner;
use crate::sentiment::domain::sentiment_analyzer::SentimentAnalyzer;

/// Scores transcripts against one fixed reference passage.
///
/// Holds only read-only state, so a single instance can be shared between
/// threads evaluating different recitations.
pub struct EvaluationPipeline {
    reference_text: String,
    aggregator: Aggregator,
    sentiment: Box<dyn SentimentAnalyzer>,
}

impl EvaluationPipeline {
    pub fn new(
        reference_text: impl Into<String>,
        weights: WeightTable,
        sentiment: Box<dyn SentimentAnalyzer>,
    ) -> Result<Self, EvaluationError> {
        let reference_text = reference_text.into();
        if reference_text.trim().is_empty() {
            return Err(EvaluationError::invalid("reference text has no words"));
        }
        weights
            .validate()
            .map_err(|e| EvaluationError::invalid(e.to_string()))?;
        Ok(Self {
            reference_text,
            aggregator: Aggregator::new(weights),
            sentiment,
        })
    }

    pub fn from_config(
        config: &EvaluationConfig,
        sentiment: Box<dyn SentimentAnalyzer>,
    ) -> Result<Self, EvaluationError> {
        Self::new(config.reference_text.clone(), config.weights, sentiment)
    }

    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    pub fn weights(&self) -> &WeightTable {
        self.aggregator.weights()
    }

    /// Computes every sub-metric, the weighted score and the grade.
    ///
    /// The first failing sub-metric aborts the evaluation.
    pub fn evaluate(&self, transcript: &str) -> Result<EvaluationResult, EvaluationError> {
        if transcript.trim().is_empty() {
            return Err(EvaluationError::invalid("transcript is empty"));
        }

        let metrics = SubMetrics {
            accuracy: TextAligner::align(&self.reference_text, transcript)?,
            hesitation_rate: HesitationDetector::detect(transcript)?,
            pronunciation_accuracy: PronunciationScorer::score(&self.reference_text, transcript)?,
            expression_score: ExpressionScorer::new(self.sentiment.as_ref()).score(transcript)?,
        };
        let weighted_average_score = self.aggregator.aggregate(&metrics);

        Ok(EvaluationResult {
            metrics,
            weighted_average_score,
            grade: GradeClassifier::classify(weighted_average_score),
        })
    }
}
