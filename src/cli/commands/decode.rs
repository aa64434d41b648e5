use crate::config::AppConfig;
use crate::decoder;
use crate::detection::{self, EncodingKind};
use crate::errors::{AppError, AppResult};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Decode a hex or base64 candidate to text
#[derive(Args)]
pub struct DecodeCommand {
    /// Candidate string to decode
    pub input: Option<String>,

    /// Read the candidate from a file instead (- for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Encoding to assume: auto, hex, base64
    #[arg(long, default_value = "auto")]
    pub kind: String,

    /// Fail on invalid UTF-8 instead of dropping bad sequences
    #[arg(long)]
    pub strict_utf8: bool,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults();
        let input = super::read_input(self.input.as_deref(), self.file.as_deref())?;
        let candidate = input.trim();

        let kind = match self.kind.as_str() {
            "hex" => EncodingKind::Hex,
            "base64" => EncodingKind::Base64,
            "auto" => {
                let detected = detection::classify_with_min_len(
                    candidate,
                    config.analysis.min_candidate_length,
                );
                if detected == EncodingKind::PlainText {
                    return Err(AppError::InvalidData(
                        "candidate does not classify as hex or base64; \
                         pass --kind to force a decoding"
                            .to_string(),
                    ));
                }
                detected
            }
            other => {
                return Err(AppError::Config(format!(
                    "unknown encoding kind '{}' (expected auto, hex or base64)",
                    other
                )))
            }
        };

        info!("Decoding {} byte(s) as {}", candidate.len(), kind);
        let lossy = !self.strict_utf8 && config.analysis.lossy_utf8;
        let decoded = decoder::decode(candidate, kind, lossy)?;
        println!("{}", decoded);

        Ok(())
    }
}
