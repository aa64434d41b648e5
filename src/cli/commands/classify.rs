use crate::config::AppConfig;
use crate::decoder;
use crate::detection::{self, EncodingKind};
use crate::errors::AppResult;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Classify a candidate string as plain text, hex or base64
#[derive(Args)]
pub struct ClassifyCommand {
    /// Candidate string to classify
    pub input: Option<String>,

    /// Read the candidate from a file instead (- for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Minimum length before hex/base64 classification is attempted
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Also decode the candidate when it classifies as hex or base64
    #[arg(long)]
    pub decode: bool,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl ClassifyCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults();
        let min_length = self
            .min_length
            .unwrap_or(config.analysis.min_candidate_length);

        let input = super::read_input(self.input.as_deref(), self.file.as_deref())?;
        let candidate = input.trim();

        let kind = detection::classify_with_min_len(candidate, min_length);
        info!("Classified {} byte(s) as {}", candidate.len(), kind);

        let decoded = if self.decode && kind != EncodingKind::PlainText {
            Some(decoder::decode(candidate, kind, config.analysis.lossy_utf8)?)
        } else {
            None
        };

        match self.format.as_str() {
            "json" => {
                let json = serde_json::json!({
                    "kind": kind,
                    "length": candidate.len(),
                    "decoded": decoded,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            _ => {
                println!("{}", kind);
                if let Some(decoded) = decoded {
                    println!("{}", decoded);
                }
            }
        }

        Ok(())
    }
}
