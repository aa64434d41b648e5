use crate::cipher::CipherMapping;
use crate::errors::{AppError, AppResult};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Generate and apply a substitution cipher mapping
#[derive(Args)]
pub struct CipherCommand {
    #[command(subcommand)]
    pub action: CipherAction,
}

#[derive(Subcommand)]
pub enum CipherAction {
    /// Generate a fresh mapping and export it as JSON
    Generate(GenerateArgs),
    /// Encode text with an exported mapping
    Encode(ApplyArgs),
    /// Decode text with an exported mapping
    Decode(ApplyArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Where to write the mapping JSON
    #[arg(long, default_value = "cipher_mapping.json")]
    pub output: PathBuf,

    /// Seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Alphabet to permute (defaults to A-Z)
    #[arg(long)]
    pub alphabet: Option<String>,
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Text to transform
    pub input: Option<String>,

    /// Read the text from a file instead (- for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Mapping JSON produced by `cipher generate`
    #[arg(long, default_value = "cipher_mapping.json")]
    pub mapping: PathBuf,
}

impl CipherCommand {
    pub fn run(&self) -> AppResult<()> {
        match &self.action {
            CipherAction::Generate(args) => generate(args),
            CipherAction::Encode(args) => {
                let mapping = load_mapping(&args.mapping)?;
                let text = super::read_input(args.input.as_deref(), args.file.as_deref())?;
                println!("{}", mapping.encode(&text));
                Ok(())
            }
            CipherAction::Decode(args) => {
                let mapping = load_mapping(&args.mapping)?;
                let text = super::read_input(args.input.as_deref(), args.file.as_deref())?;
                println!("{}", mapping.decode(&text));
                Ok(())
            }
        }
    }
}

fn generate(args: &GenerateArgs) -> AppResult<()> {
    let mapping = match &args.alphabet {
        Some(alphabet) => {
            let symbols: Vec<char> = alphabet.chars().collect();
            CipherMapping::generate_with_alphabet(&symbols, args.seed)?
        }
        None => CipherMapping::generate(args.seed),
    };

    let json = serde_json::to_string_pretty(&mapping)
        .map_err(|e| AppError::InvalidData(format!("mapping serialisation failed: {}", e)))?;
    std::fs::write(&args.output, json)?;

    info!(
        "Mapping over {} symbol(s) written to {}",
        mapping.alphabet().len(),
        args.output.display()
    );
    println!("Mapping written to {}", args.output.display());
    println!("Note: regenerating invalidates text encoded with earlier mappings.");

    Ok(())
}

fn load_mapping(path: &Path) -> AppResult<CipherMapping> {
    let json = std::fs::read_to_string(path)?;
    let mapping: CipherMapping = serde_json::from_str(&json)?;
    mapping.validate()?;
    Ok(mapping)
}
