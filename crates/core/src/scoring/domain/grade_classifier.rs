use serde::{Serialize, Serializer};

/// Discrete recitation quality bands, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    Excellent,
    VeryGood,
    Good,
    AboveAverage,
    Average,
    BelowAverage,
    Poor,
}

impl Grade {
    pub const ALL: &[Grade] = &[
        Grade::Excellent,
        Grade::VeryGood,
        Grade::Good,
        Grade::AboveAverage,
        Grade::Average,
        Grade::BelowAverage,
        Grade::Poor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::VeryGood => "Very Good",
            Grade::Good => "Good",
            Grade::AboveAverage => "Above Average",
            Grade::Average => "Average",
            Grade::BelowAverage => "Below Average",
            Grade::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Inclusive lower bounds, highest first. Anything below the last is `Poor`.
const THRESHOLDS: &[(f64, Grade)] = &[
    (90.0, Grade::Excellent),
    (80.0, Grade::VeryGood),
    (70.0, Grade::Good),
    (60.0, Grade::AboveAverage),
    (50.0, Grade::Average),
    (40.0, Grade::BelowAverage),
];

pub struct GradeClassifier;

impl GradeClassifier {
    /// No upper clamp: scores above 100 are still `Excellent`.
    pub fn classify(score: f64) -> Grade {
        THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::Poor)
    }
}
