use std::time::Instant;

use crate::pipeline::evaluation_logger::EvaluationLogger;
use crate::pipeline::evaluation_pipeline::EvaluationPipeline;
use crate::scoring::domain::evaluation_error::EvaluationError;
use crate::scoring::domain::evaluation_result::EvaluationResult;
use crate::speech::domain::recognition::{transcript_from_results, AudioPayload};
use crate::speech::domain::speech_recognizer::SpeechRecognizer;

/// Transcript of one submission together with its scores.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub transcript: String,
    pub result: EvaluationResult,
}

pub struct EvaluateRecitationUseCase {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    pipeline: EvaluationPipeline,
}

impl EvaluateRecitationUseCase {
    /// `recognizer` may be `None` when only literal transcripts are evaluated.
    pub fn new(
        recognizer: Option<Box<dyn SpeechRecognizer>>,
        pipeline: EvaluationPipeline,
    ) -> Self {
        Self {
            recognizer,
            pipeline,
        }
    }

    /// Transcribes `audio` once, then scores the transcript.
    pub fn run(
        &self,
        audio: &AudioPayload,
        logger: &mut dyn EvaluationLogger,
    ) -> Result<Evaluation, EvaluationError> {
        let recognizer = self.recognizer.as_ref().ok_or_else(|| {
            EvaluationError::upstream("speech recognition", "no recognizer configured".into())
        })?;

        // 1. Speech to text; the pipeline never runs if this fails
        let start = Instant::now();
        let results = recognizer
            .recognize(audio)
            .map_err(|e| EvaluationError::upstream("speech recognition", e))?;
        logger.timing("transcribe", elapsed_ms(start));

        // 2. Top alternative per result, newline separated
        let transcript = transcript_from_results(&results);
        logger.info(&format!(
            "Transcribed {} results: {transcript:?}",
            results.len()
        ));

        // 3. Score
        self.evaluate_transcript(&transcript, logger)
    }

    /// Scores an already available transcript.
    pub fn evaluate_transcript(
        &self,
        transcript: &str,
        logger: &mut dyn EvaluationLogger,
    ) -> Result<Evaluation, EvaluationError> {
        let start = Instant::now();
        let result = self.pipeline.evaluate(transcript)?;
        logger.timing("evaluate", elapsed_ms(start));

        for (name, value) in result.metrics.named() {
            logger.metric(name, value);
        }
        logger.metric("weightedAverageScore", result.weighted_average_score);

        Ok(Evaluation {
            transcript: transcript.to_string(),
            result,
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
