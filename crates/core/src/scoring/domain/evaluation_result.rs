use serde::Serialize;

use super::aggregator::SubMetrics;
use super::grade_classifier::Grade;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluationResult {
    pub metrics: SubMetrics,
    pub weighted_average_score: f64,
    pub grade: Grade,
}

impl EvaluationResult {
    pub fn to_report(&self) -> EvaluationReport {
        EvaluationReport {
            accuracy: fixed(self.metrics.accuracy),
            hesitation_rate: fixed(self.metrics.hesitation_rate),
            pronunciation_accuracy: fixed(self.metrics.pronunciation_accuracy),
            expression_score: fixed(self.metrics.expression_score),
            weighted_average_score: fixed(self.weighted_average_score),
            grade: self.grade,
        }
    }
}

/// Wire form of an [`EvaluationResult`]: numbers as two-decimal strings.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub accuracy: String,
    pub hesitation_rate: String,
    pub pronunciation_accuracy: String,
    pub expression_score: String,
    pub weighted_average_score: String,
    pub grade: Grade,
}

impl std::fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  Accuracy:               {}", self.accuracy)?;
        writeln!(f, "  Hesitation rate:        {}", self.hesitation_rate)?;
        writeln!(f, "  Pronunciation accuracy: {}", self.pronunciation_accuracy)?;
        writeln!(f, "  Expression score:       {}", self.expression_score)?;
        writeln!(f, "  Weighted average:       {}", self.weighted_average_score)?;
        write!(f, "  Grade:                  {}", self.grade)
    }
}

/// Two decimals, rounding exact ties away from zero.
///
/// `format!` rounds ties to even. The only binary values that sit exactly on
/// a two-decimal tie are odd multiples of 1/8, and for those `value * 100.0`
/// is exact, so `round()` resolves them.
fn fixed(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (value * 100.0).round() / 100.0);
    }
    format!("{value:.2}")
}
