use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Decoding a hex or Base64 candidate
    #[error("Decode error: {0}")]
    Decode(#[from] crate::decoder::DecodeError),

    /// Pattern extraction
    #[error("Extraction error: {0}")]
    Extraction(#[from] crate::extraction::ExtractionError),

    /// Substitution cipher mapping problems
    #[error("Cipher error: {0}")]
    Cipher(#[from] crate::cipher::CipherError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV processing
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}
