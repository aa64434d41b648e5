use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::extraction::{
    self, built_in_registry, Category, ExtractOptions, PatternRule,
};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Extract pattern matches from text
#[derive(Args)]
pub struct ExtractCommand {
    /// Text to scan
    pub input: Option<String>,

    /// Read the text from a file instead (- for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Categories to run (email, phone, date, url, flag, json-flagged,
    /// json-flagged-base64); defaults to all
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Surface undecodable base64 in flagged JSON as errors
    #[arg(long)]
    pub strict_flag_decode: bool,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl ExtractCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults();
        let text = super::read_input(self.input.as_deref(), self.file.as_deref())?;

        let rules: Vec<PatternRule> = if self.categories.is_empty() {
            built_in_registry().to_vec()
        } else {
            self.categories
                .iter()
                .map(|name| {
                    Category::from_cli_name(name)
                        .map(PatternRule::for_category)
                        .ok_or_else(|| AppError::Config(format!("unknown category '{}'", name)))
                })
                .collect::<AppResult<Vec<_>>>()?
        };

        let mut options = ExtractOptions::from_config(&config.analysis);
        if self.strict_flag_decode {
            options.flag_decode = extraction::FlagDecodeMode::Strict;
        }

        let matches = extraction::extract_with_options(&text, &rules, options)?;
        info!("{} match(es) across {} rule(s)", matches.len(), rules.len());

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&matches)?),
            _ => {
                if matches.is_empty() {
                    println!("No matches found.");
                } else {
                    for m in &matches {
                        println!("{:>6}  {:<22} {}", m.offset, m.category, m.text);
                    }
                }
            }
        }

        Ok(())
    }
}
