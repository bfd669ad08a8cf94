use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ACCURACY_WEIGHT: f64 = 0.4;
pub const DEFAULT_HESITATION_WEIGHT: f64 = 0.2;
pub const DEFAULT_PRONUNCIATION_WEIGHT: f64 = 0.2;
pub const DEFAULT_EXPRESSION_WEIGHT: f64 = 0.2;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Error, Debug, PartialEq)]
pub enum WeightTableError {
    #[error("weight for {name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("weights must sum to 1.0, got {0}")]
    BadSum(f64),
}

/// The four independently computed sub-metrics of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubMetrics {
    pub accuracy: f64,
    pub hesitation_rate: f64,
    pub pronunciation_accuracy: f64,
    pub expression_score: f64,
}

impl SubMetrics {
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("accuracy", self.accuracy),
            ("hesitationRate", self.hesitation_rate),
            ("pronunciationAccuracy", self.pronunciation_accuracy),
            ("expressionScore", self.expression_score),
        ]
    }
}

/// Named weight per sub-metric.
///
/// One field per [`SubMetrics`] field, so the key sets always agree.
/// Construct through [`WeightTable::new`] or validate after deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeightTable {
    pub accuracy: f64,
    pub hesitation_rate: f64,
    pub pronunciation_accuracy: f64,
    pub expression_score: f64,
}

impl WeightTable {
    pub fn new(
        accuracy: f64,
        hesitation_rate: f64,
        pronunciation_accuracy: f64,
        expression_score: f64,
    ) -> Result<Self, WeightTableError> {
        let table = Self {
            accuracy,
            hesitation_rate,
            pronunciation_accuracy,
            expression_score,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("accuracy", self.accuracy),
            ("hesitationRate", self.hesitation_rate),
            ("pronunciationAccuracy", self.pronunciation_accuracy),
            ("expressionScore", self.expression_score),
        ]
    }

    pub fn total(&self) -> f64 {
        self.named().iter().map(|(_, w)| w).sum()
    }

    pub fn validate(&self) -> Result<(), WeightTableError> {
        for (name, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightTableError::InvalidWeight { name, value });
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightTableError::BadSum(total));
        }
        Ok(())
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ACCURACY_WEIGHT,
            hesitation_rate: DEFAULT_HESITATION_WEIGHT,
            pronunciation_accuracy: DEFAULT_PRONUNCIATION_WEIGHT,
            expression_score: DEFAULT_EXPRESSION_WEIGHT,
        }
    }
}

/// Weighted mean of the sub-metrics.
pub struct Aggregator {
    weights: WeightTable,
}

impl Aggregator {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// `Σ metric·weight / Σ weight` over the weight table.
    pub fn aggregate(&self, metrics: &SubMetrics) -> f64 {
        let weighted: f64 = metrics
            .named()
            .iter()
            .zip(self.weights.named())
            .map(|((_, value), (_, weight))| value * weight)
            .sum();
        weighted / self.weights.total()
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(WeightTable::default())
    }
}
