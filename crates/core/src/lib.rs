//! Scores spoken recitations of a reference passage from their transcripts.
//!
//! The scoring domain is pure and synchronous. Speech recognition and
//! sentiment analysis sit behind the [`SpeechRecognizer`] and
//! [`SentimentAnalyzer`] traits so callers can swap implementations.
//!
//! [`SpeechRecognizer`]: speech::domain::speech_recognizer::SpeechRecognizer
//! [`SentimentAnalyzer`]: sentiment::domain::sentiment_analyzer::SentimentAnalyzer

pub mod config {
    pub mod evaluation_config;
}

pub mod pipeline {
    pub mod evaluate_recitation_use_case;
    pub mod evaluation_logger;
    pub mod evaluation_pipeline;
}

pub mod scoring {
    pub mod domain {
        pub mod aggregator;
        pub mod evaluation_error;
        pub mod evaluation_result;
        pub mod expression_scorer;
        pub mod grade_classifier;
        pub mod hesitation_detector;
        pub mod phonetic_encoder;
        pub mod pronunciation_scorer;
        pub mod text_aligner;
    }
}

pub mod sentiment {
    pub mod domain {
        pub mod sentiment_analyzer;
    }
    pub mod infrastructure;
}

pub mod shared {
    pub mod constants;
    pub mod model_resolver;
}

pub mod speech {
    pub mod domain {
        pub mod audio_segment;
        pub mod recognition;
        pub mod speech_recognizer;
    }
    pub mod infrastructure;
}
