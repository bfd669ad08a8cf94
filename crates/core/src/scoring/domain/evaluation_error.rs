use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{stage} collaborator failed: {source}")]
    Upstream {
        stage: &'static str,
        #[source]
        source: Box<dyn std::error::Error>,
    },
}

impl EvaluationError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    pub fn upstream(stage: &'static str, source: Box<dyn std::error::Error>) -> Self {
        Self::Upstream { stage, source }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_input_message() {
        let err = EvaluationError::invalid("reference text is empty");
        assert_eq!(err.to_string(), "invalid input: reference text is empty");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_upstream_preserves_source() {
        let err = EvaluationError::upstream("speech recognition", "connection reset".into());
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("speech recognition"));
        assert_eq!(err.source().unwrap().to_string(), "connection reset");
    }
}
