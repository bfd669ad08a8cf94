/// Passage recited when no configuration overrides it.
pub const DEFAULT_REFERENCE_TEXT: &str = "it was anxious to find him knowing that expectation of a man who were giving his father enjoyment and she was avoided insight in the minister to which indeed";

pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";

pub const WHISPER_MODEL_NAME: &str = "ggml-tiny.en.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-tiny.en.bin";
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

/// Directory name under the platform config/cache roots.
pub const APP_DIR_NAME: &str = "Recitation Eval";
pub const CONFIG_FILE_NAME: &str = "config.json";
