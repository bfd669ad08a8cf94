/// Output of a sentiment analysis pass over one text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SentimentAnalysis {
    /// Signed polarity; unbounded.
    pub score: f64,
    /// `score` divided by the number of tokens analyzed.
    pub comparative: f64,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Domain interface for sentiment polarity scoring.
///
/// Shared across concurrent evaluations, hence `Sync` and `&self`.
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<SentimentAnalysis, Box<dyn std::error::Error>>;
}
