use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// CTF Text Analysis Toolkit
#[derive(Parser)]
#[command(name = "textsift")]
#[command(about = "Classify, decode and extract flags and structured patterns from opaque text")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Classify a candidate string as plain text, hex or base64
    Classify(commands::classify::ClassifyCommand),
    /// Decode a hex or base64 candidate to text
    Decode(commands::decode::DecodeCommand),
    /// Extract pattern matches (emails, phones, dates, URLs, flags) from text
    Extract(commands::extract::ExtractCommand),
    /// Scan every cell of a CSV file for encoded flags and patterns
    Scan(commands::scan::ScanCommand),
    /// Generate and apply a substitution cipher mapping
    Cipher(commands::cipher::CipherCommand),
    /// SHA-256 digest, verify and wordlist-crack helpers
    Hash(commands::hash::HashCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(command) => command.run(),
        Commands::Decode(command) => command.run(),
        Commands::Extract(command) => command.run(),
        Commands::Scan(command) => command.run(),
        Commands::Cipher(command) => command.run(),
        Commands::Hash(command) => command.run(),
    }
}
