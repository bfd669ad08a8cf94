use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for evaluation events.
///
/// Keeps the use case independent of where progress and metrics end up
/// (log crate, JSON output, tests).
pub trait EvaluationLogger: Send {
    /// Record how long a named stage took for one evaluation.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record one sub-metric or score value.
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Discards all events.
pub struct NullEvaluationLogger;

impl EvaluationLogger for NullEvaluationLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Forwards messages to the `log` crate and accumulates per-stage timings
/// and per-metric values for a batch summary.
pub struct LogEvaluationLogger {
    timings: HashMap<String, Vec<f64>>,
    metrics: HashMap<String, Vec<f64>>,
    start_time: Instant,
}

impl LogEvaluationLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            metrics: HashMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Number of evaluations recorded, taken from the weighted score metric.
    pub fn evaluations(&self) -> usize {
        self.metrics
            .get("weightedAverageScore")
            .map_or(0, |v| v.len())
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Evaluation summary ({} recitations, {:.1}s total):",
            self.evaluations(),
            elapsed_ms / 1000.0
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            lines.push(format!(
                "  {stage:12}: avg {:7.1}ms  total {total_ms:8.0}ms",
                average(durations)
            ));
        }

        let mut names: Vec<_> = self.metrics.keys().collect();
        names.sort();
        for name in names {
            let values = &self.metrics[name];
            lines.push(format!("  {name}: avg {:.2}", average(values)));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    pub fn metrics_for(&self, name: &str) -> Option<&[f64]> {
        self.metrics.get(name).map(|v| v.as_slice())
    }
}

impl Default for LogEvaluationLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationLogger for LogEvaluationLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        log::debug!("{stage} took {duration_ms:.1}ms");
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullEvaluationLogger;
        logger.timing("transcribe", 5.0);
        logger.metric("accuracy", 80.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = LogEvaluationLogger::new();
        logger.timing("transcribe", 20.0);
        logger.timing("transcribe", 30.0);
        logger.timing("evaluate", 1.0);

        assert_eq!(logger.timings_for("transcribe").unwrap(), &[20.0, 30.0]);
        assert_eq!(logger.timings_for("evaluate").unwrap(), &[1.0]);
        assert!(logger.timings_for("missing").is_none());
    }

    #[test]
    fn test_metric_records_values() {
        let mut logger = LogEvaluationLogger::new();
        logger.metric("accuracy", 80.0);
        logger.metric("accuracy", 90.0);

        let values = logger.metrics_for("accuracy").unwrap();
        assert_relative_eq!(average(values), 85.0);
    }

    #[test]
    fn test_evaluations_counted_from_weighted_score() {
        let mut logger = LogEvaluationLogger::new();
        logger.metric("accuracy", 80.0);
        assert_eq!(logger.evaluations(), 0);
        logger.metric("weightedAverageScore", 70.0);
        logger.metric("weightedAverageScore", 75.0);
        assert_eq!(logger.evaluations(), 2);
    }

    #[test]
    fn test_summary_includes_timings_and_metrics() {
        let mut logger = LogEvaluationLogger::new();
        logger.timing("transcribe", 250.0);
        logger.metric("accuracy", 80.0);
        logger.metric("accuracy", 90.0);
        logger.metric("weightedAverageScore", 72.5);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Evaluation summary (1 recitations"));
        assert!(summary.contains("transcribe"));
        assert!(summary.contains("accuracy: avg 85.00"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        assert!(LogEvaluationLogger::new().summary_string().is_none());
    }

    #[test]
    fn test_info_does_not_count_toward_summary() {
        let mut logger = LogEvaluationLogger::default();
        logger.info("hello world");
        assert!(logger.summary_string().is_none());
    }
}
