//! # OxiLZ Codec: Pure Rust Dictionary Text Compression
//!
//! This crate compresses text into text. A dictionary coder in the LZ78/LZW
//! family turns UTF-16 code units into a stream of growing-width codes, and
//! the stream is rendered in one of several output alphabets.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Text in, text out**: UTF-16, Base64 and URI-safe renderings
//! - **Raw mode**: 16 bits per unit, as code units or big-endian bytes
//! - **Paint data**: `lz:`-marked Base64 for mixed compressed/plain fields
//!
//! ## Stream Format
//!
//! - **Control codes**: `0` = 8-bit literal, `1` = 16-bit literal,
//!   `2` = end of stream; dictionary entries start at code 3
//! - **Growing width**: codes start at 2 bits; the width grows by one each
//!   time a countdown (restarted at `2^width`) expires
//! - **Bit order**: values LSB-first, characters filled MSB-first, the last
//!   character zero-padded
//! - **No header, no checksum**: a whole string in, a whole string out
//!
//! ## Example
//!
//! ```rust
//! use oxilz_codec::{compress_to_base64, decompress_from_base64};
//!
//! let original = "TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress_to_base64(original);
//! assert_eq!(compressed, "CoeQQgoiBKByLFJGSpwUA===");
//!
//! let decompressed = decompress_from_base64(compressed.as_str());
//! assert_eq!(decompressed.as_deref(), Some(original));
//! ```
//!
//! ## Absent and Empty Inputs
//!
//! The string functions accept either `&str` or `Option<&str>`. Decoders keep
//! an asymmetry that stored data already depends on:
//!
//! ```rust
//! use oxilz_codec::{compress, decompress};
//!
//! assert_eq!(compress(""), "");
//! assert_eq!(decompress(None), Some(String::new()));
//! assert_eq!(decompress(""), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod dictionary;
mod encoder;
pub mod paint;
mod width;

pub use decoder::LzDecoder;
pub use encoder::LzEncoder;
pub use oxilz_core::{Alphabet, Base64, LzError, Raw, Result, UriSafe, Utf16};
pub use paint::{
    PAINT_DATA_MARKER, compress_paint_data, decompress_paint_data, is_compressed_paint_data,
};

use tracing::debug;

/// Compress UTF-16 code units into characters of alphabet `A`.
///
/// # Example
///
/// ```rust
/// use oxilz_codec::{Utf16, compress_units};
///
/// let input: Vec<u16> = "aaaaaaaa".encode_utf16().collect();
/// let compressed = compress_units::<Utf16>(&input);
/// assert!(compressed.len() < input.len());
/// ```
pub fn compress_units<A: Alphabet>(input: &[u16]) -> Vec<u16> {
    LzEncoder::new().encode::<A>(input)
}

/// Decompress characters of alphabet `A`, reporting why a stream failed.
///
/// Unlike the string adapters, this distinguishes a truncated stream from
/// a corrupt one.
///
/// # Example
///
/// ```rust
/// use oxilz_codec::{Base64, compress_units, decompress_units};
///
/// let input: Vec<u16> = "Hello, world".encode_utf16().collect();
/// let compressed = compress_units::<Base64>(&input);
/// assert_eq!(decompress_units::<Base64>(&compressed).unwrap(), input);
/// assert!(decompress_units::<Base64>(&compressed[..3]).unwrap_err().is_truncation());
/// ```
pub fn decompress_units<A: Alphabet>(input: &[u16]) -> Result<Vec<u16>> {
    LzDecoder::new().decode::<A>(input)
}

/// Compress text with the 15-bit wide alphabet.
///
/// An absent input compresses like an empty one, to `""`.
///
/// # Example
///
/// ```rust
/// use oxilz_codec::{compress, decompress};
///
/// let compressed = compress("Hello, world");
/// assert_eq!(decompress(compressed.as_str()).as_deref(), Some("Hello, world"));
/// ```
pub fn compress<'a>(input: impl Into<Option<&'a str>>) -> String {
    compress_str::<Utf16>(input.into())
}

/// Decompress text produced by [`compress`].
///
/// Returns `Some("")` for an absent input or a truncated stream, and `None`
/// for an empty input, a corrupt stream, or output that is not valid UTF-16.
pub fn decompress<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    decompress_str::<Utf16>(input.into())
}

/// Compress text to standard Base64, padded with `=` to a multiple of four.
///
/// # Example
///
/// ```rust
/// use oxilz_codec::compress_to_base64;
///
/// let compressed = compress_to_base64("A".repeat(1000).as_str());
/// assert_eq!(compressed.len() % 4, 0);
/// assert!(compressed.len() < 100);
/// ```
pub fn compress_to_base64<'a>(input: impl Into<Option<&'a str>>) -> String {
    compress_str::<Base64>(input.into())
}

/// Decompress text produced by [`compress_to_base64`].
///
/// Follows the same absent/empty contract as [`decompress`].
pub fn decompress_from_base64<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    decompress_str::<Base64>(input.into())
}

/// Compress text to the URI-safe alphabet, without padding.
///
/// # Example
///
/// ```rust
/// use oxilz_codec::{compress_to_uri_safe, decompress_from_uri_safe};
///
/// let compressed = compress_to_uri_safe("https://example.com/?q=a b&r=ü");
/// assert!(compressed.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-'));
/// assert_eq!(
///     decompress_from_uri_safe(compressed.as_str()).as_deref(),
///     Some("https://example.com/?q=a b&r=ü")
/// );
/// ```
pub fn compress_to_uri_safe<'a>(input: impl Into<Option<&'a str>>) -> String {
    compress_str::<UriSafe>(input.into())
}

/// Decompress text produced by [`compress_to_uri_safe`].
///
/// Spaces are read as `+`, undoing form-style URL decoding. Follows the same
/// absent/empty contract as [`decompress`].
pub fn decompress_from_uri_safe<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
    let units: Option<Vec<u16>> = input.into().map(|s| {
        s.encode_utf16()
            .map(|unit| if unit == SPACE { PLUS } else { unit })
            .collect()
    });
    decompress_legacy::<UriSafe>(units.as_deref()).and_then(units_to_string)
}

/// Compress UTF-16 code units with the raw 16-bit alphabet.
///
/// The output may contain unpaired surrogates.
pub fn compress_raw(input: &[u16]) -> Vec<u16> {
    compress_units::<Raw>(input)
}

/// Decompress code units produced by [`compress_raw`].
///
/// Follows the same absent/empty contract as [`decompress`], returning the
/// exact code units.
pub fn decompress_raw<'a>(input: impl Into<Option<&'a [u16]>>) -> Option<Vec<u16>> {
    decompress_legacy::<Raw>(input.into())
}

/// Compress text with the raw alphabet, serialized as big-endian bytes.
///
/// # Example
///
/// ```rust
/// use oxilz_codec::{compress_to_bytes, decompress_from_bytes};
///
/// let bytes = compress_to_bytes("binary-safe storage");
/// assert_eq!(bytes.len() % 2, 0);
/// assert_eq!(
///     decompress_from_bytes(bytes.as_slice()).as_deref(),
///     Some("binary-safe storage")
/// );
/// ```
pub fn compress_to_bytes<'a>(input: impl Into<Option<&'a str>>) -> Vec<u8> {
    let units: Vec<u16> = input.into().unwrap_or_default().encode_utf16().collect();
    compress_raw(&units)
        .into_iter()
        .flat_map(u16::to_be_bytes)
        .collect()
}

/// Decompress bytes produced by [`compress_to_bytes`].
///
/// A trailing odd byte is ignored. Follows the same absent/empty contract as
/// [`decompress`].
pub fn decompress_from_bytes<'a>(input: impl Into<Option<&'a [u8]>>) -> Option<String> {
    let units: Option<Vec<u16>> = input.into().map(|bytes| {
        bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect()
    });
    decompress_legacy::<Raw>(units.as_deref()).and_then(units_to_string)
}

const SPACE: u16 = b' ' as u16;
const PLUS: u16 = b'+' as u16;

fn compress_str<A: Alphabet>(input: Option<&str>) -> String {
    let units: Vec<u16> = input.unwrap_or_default().encode_utf16().collect();
    // Text alphabets never produce surrogates, so this is lossless.
    String::from_utf16_lossy(&compress_units::<A>(&units))
}

fn decompress_str<A: Alphabet>(input: Option<&str>) -> Option<String> {
    let units: Option<Vec<u16>> = input.map(|s| s.encode_utf16().collect());
    decompress_legacy::<A>(units.as_deref()).and_then(units_to_string)
}

/// Map a strict decode onto the established nullable contract.
fn decompress_legacy<A: Alphabet>(input: Option<&[u16]>) -> Option<Vec<u16>> {
    let input = match input {
        None => return Some(Vec::new()),
        Some([]) => return None,
        Some(input) => input,
    };

    match decompress_units::<A>(input) {
        Ok(units) => Some(units),
        Err(err) if err.is_truncation() => {
            debug!(alphabet = A::NAME, error = %err, "truncated stream decoded as empty");
            Some(Vec::new())
        }
        Err(err) => {
            debug!(alphabet = A::NAME, error = %err, "corrupt stream");
            None
        }
    }
}

fn units_to_string(units: Vec<u16>) -> Option<String> {
    match String::from_utf16(&units) {
        Ok(text) => Some(text),
        Err(err) => {
            let err = LzError::from(err);
            debug!(error = %err, "decoded units are not a string");
            None
        }
    }
}
