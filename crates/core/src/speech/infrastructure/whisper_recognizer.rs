use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::speech::domain::audio_segment::AudioSegment;
use crate::speech::domain::recognition::{
    AudioEncoding, AudioPayload, RecognitionAlternative, RecognitionResult,
};
use crate::speech::domain::speech_recognizer::SpeechRecognizer;

/// Speech recognizer using whisper.cpp via whisper-rs.
///
/// Each Whisper segment becomes one recognition result with a single
/// alternative.
#[derive(Debug)]
pub struct WhisperRecognizer {
    model_path: PathBuf,
}

impl WhisperRecognizer {
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !model_path.exists() {
            return Err(format!("Whisper model not found at: {}", model_path.display()).into());
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
        })
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn recognize(
        &self,
        audio: &AudioPayload,
    ) -> Result<Vec<RecognitionResult>, Box<dyn std::error::Error>> {
        let segment = match audio.config.encoding {
            AudioEncoding::Linear16 => {
                AudioSegment::from_linear16(&audio.content, audio.config.sample_rate_hertz)?
            }
        };
        let segment = segment.resampled(WHISPER_SAMPLE_RATE);
        log::debug!(
            "Recognizing {:.1}s of audio ({})",
            segment.duration(),
            audio.config.language_code
        );

        let ctx = WhisperContext::new_with_params(
            self.model_path.to_str().ok_or("Invalid model path")?,
            WhisperContextParameters::default(),
        )
        .map_err(|e| format!("Failed to load Whisper model: {e}"))?;

        let mut state = ctx
            .create_state()
            .map_err(|e| format!("Failed to create Whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some(audio.config.language()));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state
            .full(params, segment.samples())
            .map_err(|e| format!("Whisper inference failed: {e}"))?;

        let mut results = Vec::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let mut text = String::new();
            let mut probabilities = Vec::new();
            for tok_idx in 0..segment.n_tokens() {
                let token = match segment.get_token(tok_idx) {
                    Some(t) => t,
                    None => continue,
                };
                let piece = match token.to_str() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                // Special tokens look like [_BEG_], [_SOT_], <|endoftext|>
                let trimmed = piece.trim();
                if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                    continue;
                }

                text.push_str(piece);
                probabilities.push(token.token_probability());
            }

            let transcript = text.trim();
            if transcript.is_empty() {
                continue;
            }
            results.push(RecognitionResult {
                alternatives: vec![RecognitionAlternative {
                    transcript: transcript.to_string(),
                    confidence: mean(&probabilities),
                }],
            });
        }

        log::debug!("Whisper produced {} segments", results.len());
        Ok(results)
    }
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f32>() / values.len() as f32
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
