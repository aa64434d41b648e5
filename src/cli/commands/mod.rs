pub mod cipher;
pub mod classify;
pub mod decode;
pub mod extract;
pub mod hash;
pub mod scan;

use crate::errors::{AppError, AppResult};
use std::io::Read;
use std::path::Path;

/// Read command input from an inline argument, a file, or stdin (`-`)
pub(crate) fn read_input(inline: Option<&str>, file: Option<&Path>) -> AppResult<String> {
    match (inline, file) {
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) if path == Path::new("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (Some(_), Some(_)) => Err(AppError::Config(
            "Provide either inline text or --file, not both".to_string(),
        )),
        (None, None) => Err(AppError::Config(
            "Provide inline text or --file <PATH> (use - for stdin)".to_string(),
        )),
    }
}
