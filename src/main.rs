use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use resume_extract::error::{ExtractError, InputError};
use resume_extract::{Config, Extraction, ResumeExtractor};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Inputs shorter than this (after trimming) are rejected
const MIN_INPUT_LENGTH: usize = 10;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(name = "resume-extract")]
#[command(about = "Extract structured fields and section-aware chunks from resume text")]
#[command(version = VERSION)]
struct Cli {
    /// Resume text file; `-` or absent reads stdin
    input: Option<PathBuf>,

    /// Resume text given inline instead of a file
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Path to config file (default: <config dir>/resume-extract/config.toml)
    #[arg(short, long, env = "RESUME_EXTRACT_CONFIG")]
    config: Option<PathBuf>,

    /// Which part of the extraction to print
    #[arg(short, long, value_enum, default_value_t = OutputKind::All)]
    output: OutputKind,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Print the JSON schema of the output and exit
    #[arg(long)]
    schema: bool,

    /// Override chunking.min_chunk_length
    #[arg(long)]
    min_chunk_length: Option<usize>,

    /// Override chunking.max_chunk_length
    #[arg(long)]
    max_chunk_length: Option<usize>,

    /// Override chunking.sliding_window_overlap
    #[arg(long)]
    overlap: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    #[default]
    All,
    Fields,
    Chunks,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(user_error = err.is_user_error(), "extraction failed");
            println!("{}", serde_json::json!({ "error": err.to_user_string() }));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ExtractError> {
    if cli.schema {
        let schema = schemars::schema_for!(Extraction);
        return print_json(&schema, cli.compact);
    }

    let text = read_input(cli)?;
    check_input(&text)?;

    let extractor = ResumeExtractor::with_config(load_config(cli)?)?;

    match cli.output {
        OutputKind::All => print_json(&extractor.extract(&text), cli.compact),
        OutputKind::Fields => print_json(&extractor.extract_fields(&text), cli.compact),
        OutputKind::Chunks => print_json(&extractor.chunk(&text).0, cli.compact),
    }
}

/// CLI args > Environment variables > Config file > Defaults
fn load_config(cli: &Cli) -> Result<Config, ExtractError> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::new()?,
    };

    if let Some(min) = cli.min_chunk_length {
        config.chunking.min_chunk_length = min;
    }
    if let Some(max) = cli.max_chunk_length {
        config.chunking.max_chunk_length = max;
    }
    if let Some(overlap) = cli.overlap {
        config.chunking.sliding_window_overlap = overlap;
    }

    Ok(config)
}

/// Reject blank input and input too short to be a resume
fn check_input(text: &str) -> Result<(), InputError> {
    let len = text.trim().chars().count();
    if len == 0 {
        Err(InputError::Empty)
    } else if len < MIN_INPUT_LENGTH {
        Err(InputError::TooShort {
            len,
            min: MIN_INPUT_LENGTH,
        })
    } else {
        Ok(())
    }
}

fn read_input(cli: &Cli) -> Result<String, ExtractError> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }

    match &cli.input {
        Some(path) if path.as_os_str() != "-" => read_file(path).map_err(ExtractError::from),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), ExtractError> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", json);
    Ok(())
}
