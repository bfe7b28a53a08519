//! Error types for OxiLZ operations.
//!
//! Compression never fails. Decompression distinguishes a stream that
//! references a code the dictionary cannot have produced from a stream that
//! simply stops before its end marker; the string adapters collapse both into
//! their established `Option` contract.

use std::string::FromUtf16Error;
use thiserror::Error;

/// The main error type for OxiLZ operations.
#[derive(Debug, Error)]
pub enum LzError {
    /// A dictionary code beyond the next assignable code was read.
    #[error("Invalid dictionary code {code} (dictionary size {dict_size})")]
    InvalidCode {
        /// The code read from the stream.
        code: u32,
        /// Number of codes assigned when the code was read.
        dict_size: u32,
    },

    /// The input ran out before an end-of-stream marker was read.
    #[error("Stream truncated: consumed {consumed} of {length} characters without an end marker")]
    Truncated {
        /// Characters pulled from the input, counting the one past the end.
        consumed: usize,
        /// Length of the input in characters.
        length: usize,
    },

    /// Decoded code units do not form valid UTF-16.
    #[error("Decoded text is not valid UTF-16: {0}")]
    InvalidUtf16(#[from] FromUtf16Error),
}

/// Result type alias for OxiLZ operations.
pub type Result<T> = std::result::Result<T, LzError>;

impl LzError {
    /// Create an invalid code error.
    pub fn invalid_code(code: u32, dict_size: u32) -> Self {
        Self::InvalidCode { code, dict_size }
    }

    /// Create a truncated stream error.
    pub fn truncated(consumed: usize, length: usize) -> Self {
        Self::Truncated { consumed, length }
    }

    /// Whether the error only signals a missing end marker.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}
