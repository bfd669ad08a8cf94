use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use recitation_core::config::evaluation_config::EvaluationConfig;
use recitation_core::pipeline::evaluate_recitation_use_case::{
    EvaluateRecitationUseCase, Evaluation,
};
use recitation_core::pipeline::evaluation_logger::{EvaluationLogger, LogEvaluationLogger};
use recitation_core::pipeline::evaluation_pipeline::EvaluationPipeline;
use recitation_core::shared::constants::{WHISPER_MODEL_NAME, WHISPER_MODEL_URL};
use recitation_core::shared::model_resolver;
use recitation_core::speech::domain::recognition::AudioPayload;
use recitation_core::speech::domain::speech_recognizer::SpeechRecognizer;
use recitation_core::speech::infrastructure::whisper_recognizer::WhisperRecognizer;

/// Score spoken recitations of a reference passage.
#[derive(Parser)]
#[command(name = "recitation-eval")]
struct Cli {
    /// LINEAR16 audio files (WAV or raw PCM) to transcribe and score.
    audio: Vec<PathBuf>,

    /// Score this transcript directly instead of transcribing audio.
    #[arg(long, conflicts_with = "audio")]
    transcript: Option<String>,

    /// JSON config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reference passage (overrides the config file).
    #[arg(long)]
    reference: Option<String>,

    /// Whisper model file (downloaded to the cache when omitted).
    #[arg(long)]
    model: Option<PathBuf>,

    /// Recognition language code, e.g. en-US.
    #[arg(long)]
    language: Option<String>,

    /// Sample rate of headerless PCM input in Hz.
    #[arg(long)]
    sample_rate: Option<u32>,

    /// JSON lexicon of extra sentiment valences ({"word": -5..5}).
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = build_config(&cli)?;
    let sentiment = config.sentiment_analyzer()?;
    let pipeline = EvaluationPipeline::from_config(&config, Box::new(sentiment))?;
    let mut logger = LogEvaluationLogger::new();

    if let Some(transcript) = &cli.transcript {
        let use_case = EvaluateRecitationUseCase::new(None, pipeline);
        let evaluation = use_case.evaluate_transcript(transcript, &mut logger)?;
        print_evaluation(None, &evaluation, cli.json)?;
        return Ok(());
    }

    let recognizer = build_recognizer(cli.model.as_deref())?;
    let use_case = EvaluateRecitationUseCase::new(Some(recognizer), pipeline);

    for path in &cli.audio {
        log::info!("Evaluating {}", path.display());
        let content = fs::read(path)
            .map_err(|e| format!("Failed to read audio file {}: {e}", path.display()))?;
        let payload = AudioPayload::new(content, config.recognition.clone());
        let evaluation = use_case.run(&payload, &mut logger)?;
        print_evaluation(Some(path), &evaluation, cli.json)?;
    }

    if cli.audio.len() > 1 {
        logger.summary();
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<EvaluationConfig, Box<dyn std::error::Error>> {
    let mut config = EvaluationConfig::load(cli.config.as_deref())?;
    if let Some(reference) = &cli.reference {
        config.reference_text = reference.clone();
    }
    if let Some(language) = &cli.language {
        config.recognition.language_code = language.clone();
    }
    if let Some(rate) = cli.sample_rate {
        config.recognition.sample_rate_hertz = rate;
    }
    if let Some(lexicon) = &cli.lexicon {
        config.lexicon_path = Some(lexicon.clone());
    }
    config.validate()?;
    Ok(config)
}

fn build_recognizer(
    model: Option<&Path>,
) -> Result<Box<dyn SpeechRecognizer>, Box<dyn std::error::Error>> {
    let model_path = match model {
        Some(path) => path.to_path_buf(),
        None => {
            log::info!("Resolving model: {WHISPER_MODEL_NAME}");
            let path = model_resolver::resolve(
                WHISPER_MODEL_NAME,
                WHISPER_MODEL_URL,
                None,
                Some(Box::new(download_progress)),
            )?;
            eprintln!();
            path
        }
    };
    Ok(Box::new(WhisperRecognizer::new(&model_path)?))
}

fn print_evaluation(
    source: Option<&Path>,
    evaluation: &Evaluation,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = evaluation.result.to_report();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(path) = source {
        println!("{}", path.display());
    }
    println!("Transcribed Text: {}", evaluation.transcript);
    println!("Evaluation Result:\n{report}");
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.transcript.is_none() && cli.audio.is_empty() {
        return Err("Provide at least one audio file or --transcript".into());
    }
    if let Some(missing) = cli.audio.iter().find(|p| !p.exists()) {
        return Err(format!("Input file not found: {}", missing.display()).into());
    }
    if let Some(model) = &cli.model {
        if !model.exists() {
            return Err(format!("Model file not found: {}", model.display()).into());
        }
    }
    if cli.sample_rate == Some(0) {
        return Err("Sample rate must be a positive integer".into());
    }
    if let Some(language) = &cli.language {
        if language.trim().is_empty() {
            return Err("Language code must not be empty".into());
        }
    }
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech recognition model... {pct}%");
    } else {
        eprint!("\rDownloading speech recognition model... {downloaded} bytes");
    }
}
