use super::recognition::{AudioPayload, RecognitionResult};

/// Domain interface for speech-to-text transcription.
///
/// Implementations return recognized spans in order, each with one or more
/// alternative transcriptions ranked best first.
pub trait SpeechRecognizer: Send + Sync {
    fn recognize(
        &self,
        audio: &AudioPayload,
    ) -> Result<Vec<RecognitionResult>, Box<dyn std::error::Error>>;
}
