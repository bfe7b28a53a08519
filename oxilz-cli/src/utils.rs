//! Utility functions for the CLI.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Errors reported by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text input was not valid UTF-8.
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The compressed input could not be decoded.
    #[error("Cannot decompress input as {format}: stream is corrupt or empty")]
    DecodeFailed {
        /// Name of the format that was attempted.
        format: &'static str,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Read all input bytes from a file, or from stdin when the path is absent or `-`.
pub fn read_input(path: Option<&Path>) -> CliResult<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => Ok(fs::read(path)?),
        _ => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

/// Read all input as UTF-8 text.
pub fn read_input_text(path: Option<&Path>) -> CliResult<String> {
    String::from_utf8(read_input(path)?).map_err(|err| CliError::from(err.utf8_error()))
}

/// Write output bytes to a file, or to stdout when the path is absent or `-`.
pub fn write_output(path: Option<&Path>, data: &[u8]) -> CliResult<()> {
    match path {
        Some(path) if path != Path::new("-") => fs::write(path, data)?,
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Percentage of space saved going from `original` to `compressed` units.
pub fn savings_percent(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}
