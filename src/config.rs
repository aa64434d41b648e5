use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

/// Default minimum candidate length before hex/Base64 classification is attempted
pub const DEFAULT_MIN_CANDIDATE_LENGTH: usize = 8;

/// Application configuration loaded from textsift.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
}

/// Tuning knobs for the classify/decode/extract pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Candidates shorter than this always classify as plain text.
    /// Precision/recall trade-off against short incidental tokens.
    pub min_candidate_length: usize,
    /// Drop invalid UTF-8 sequences in decoded payloads instead of failing
    pub lossy_utf8: bool,
    /// Surface undecodable Base64 payloads in flagged-JSON entries as errors
    /// instead of silently skipping them
    pub strict_flag_decode: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_candidate_length: DEFAULT_MIN_CANDIDATE_LENGTH,
            lossy_utf8: true,
            strict_flag_decode: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from textsift.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AnalysisConfig::default();
        let config = Config::builder()
            .set_default(
                "analysis.min_candidate_length",
                defaults.min_candidate_length as i64,
            )?
            .set_default("analysis.lossy_utf8", defaults.lossy_utf8)?
            .set_default("analysis.strict_flag_decode", defaults.strict_flag_decode)?
            // Load from textsift.toml if it exists
            .add_source(File::with_name("textsift").required(false))
            // TEXTSIFT_ANALYSIS__LOSSY_UTF8 etc. can override file settings.
            // separator() also changes the prefix separator, so pin the
            // prefix back to a single underscore
            .add_source(
                config::Environment::with_prefix("TEXTSIFT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(_) => Self {
                analysis: AnalysisConfig::default(),
            },
        }
    }
}
