//! Output alphabets.
//!
//! An alphabet decides how many bits of the packed stream one output
//! character carries (`BITS_PER_CHAR`) and how a symbol of that width maps to
//! a UTF-16 code unit and back. Four alphabets are provided:
//!
//! | Alphabet | Bits | Mapping | Reset value | Padding |
//! |----------|------|---------|-------------|---------|
//! | [`Raw`] | 16 | identity | 32768 | none |
//! | [`Utf16`] | 15 | symbol + 32 | 16384 | none |
//! | [`Base64`] | 6 | `A-Z a-z 0-9 + /` | 32 | `=` to a multiple of 4 |
//! | [`UriSafe`] | 6 | `A-Z a-z 0-9 + -` | 32 | none |
//!
//! Reverse lookups for the table alphabets are built once per process.
//! Characters outside a table decode as symbol 0, so padding and stray
//! characters contribute zero bits.

use std::sync::OnceLock;

/// Standard Base64 symbols.
const BASE64_TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URI-safe symbols: `/` becomes `-`.
const URI_SAFE_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-";

/// Base64 padding character.
const BASE64_PAD: u16 = b'=' as u16;

/// Offset applied by the [`Utf16`] alphabet to stay clear of control characters.
const UTF16_OFFSET: u16 = 32;

/// A mapping between packed symbols and output code units.
pub trait Alphabet {
    /// Number of stream bits carried by one output character.
    const BITS_PER_CHAR: u8;

    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Map a symbol in `0..2^BITS_PER_CHAR` to its output code unit.
    fn symbol_to_char(symbol: u16) -> u16;

    /// Map an input code unit back to its symbol.
    ///
    /// The result is only ever tested against single-bit masks below
    /// `2^BITS_PER_CHAR`, so out-of-range inputs may return any value.
    fn char_to_symbol(unit: u16) -> u32;

    /// Initial bit mask of the unpacker: the top bit of one character.
    fn reset_value() -> u32 {
        1 << (Self::BITS_PER_CHAR - 1)
    }

    /// Append alphabet-specific padding to a finished output.
    fn pad(_output: &mut Vec<u16>) {}
}

/// Identity alphabet over full 16-bit code units.
///
/// The output may contain unpaired surrogates, so it is only exposed as code
/// units or bytes, never as a Rust `String`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Raw;

impl Alphabet for Raw {
    const BITS_PER_CHAR: u8 = 16;
    const NAME: &'static str = "raw";

    #[inline]
    fn symbol_to_char(symbol: u16) -> u16 {
        symbol
    }

    #[inline]
    fn char_to_symbol(unit: u16) -> u32 {
        u32::from(unit)
    }
}

/// Wide alphabet: 15 bits per character, offset into the printable range.
///
/// Every output unit lies in `32..=32799`, below the surrogate range, so the
/// output is always a valid string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

impl Alphabet for Utf16 {
    const BITS_PER_CHAR: u8 = 15;
    const NAME: &'static str = "utf16";

    #[inline]
    fn symbol_to_char(symbol: u16) -> u16 {
        symbol + UTF16_OFFSET
    }

    #[inline]
    fn char_to_symbol(unit: u16) -> u32 {
        // Units below the offset wrap to two's-complement values.
        u32::from(unit).wrapping_sub(u32::from(UTF16_OFFSET))
    }
}

/// Standard Base64 alphabet with `=` padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64;

impl Alphabet for Base64 {
    const BITS_PER_CHAR: u8 = 6;
    const NAME: &'static str = "base64";

    #[inline]
    fn symbol_to_char(symbol: u16) -> u16 {
        u16::from(BASE64_TABLE[usize::from(symbol & 0x3F)])
    }

    #[inline]
    fn char_to_symbol(unit: u16) -> u32 {
        static REVERSE: OnceLock<[u8; 128]> = OnceLock::new();
        lookup(REVERSE.get_or_init(|| reverse_table(BASE64_TABLE)), unit)
    }

    fn pad(output: &mut Vec<u16>) {
        while output.len() % 4 != 0 {
            output.push(BASE64_PAD);
        }
    }
}

/// URI-safe Base64 variant without padding.
///
/// Callers decoding text that went through form encoding should map spaces
/// back to `+` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UriSafe;

impl Alphabet for UriSafe {
    const BITS_PER_CHAR: u8 = 6;
    const NAME: &'static str = "uri";

    #[inline]
    fn symbol_to_char(symbol: u16) -> u16 {
        u16::from(URI_SAFE_TABLE[usize::from(symbol & 0x3F)])
    }

    #[inline]
    fn char_to_symbol(unit: u16) -> u32 {
        static REVERSE: OnceLock<[u8; 128]> = OnceLock::new();
        lookup(REVERSE.get_or_init(|| reverse_table(URI_SAFE_TABLE)), unit)
    }
}

/// Build an ASCII reverse lookup table for a 64-symbol alphabet.
fn reverse_table(table: &[u8; 64]) -> [u8; 128] {
    let mut reverse = [0u8; 128];
    for (symbol, &ch) in table.iter().enumerate() {
        reverse[usize::from(ch)] = symbol as u8;
    }
    reverse
}

#[inline]
fn lookup(reverse: &[u8; 128], unit: u16) -> u32 {
    reverse
        .get(usize::from(unit))
        .map_or(0, |&symbol| u32::from(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_values() {
        assert_eq!(Raw::reset_value(), 32768);
        assert_eq!(Utf16::reset_value(), 16384);
        assert_eq!(Base64::reset_value(), 32);
        assert_eq!(UriSafe::reset_value(), 32);
    }

    #[test]
    fn test_base64_mapping() {
        assert_eq!(Base64::symbol_to_char(0), u16::from(b'A'));
        assert_eq!(Base64::symbol_to_char(26), u16::from(b'a'));
        assert_eq!(Base64::symbol_to_char(62), u16::from(b'+'));
        assert_eq!(Base64::symbol_to_char(63), u16::from(b'/'));

        for symbol in 0..64u16 {
            let ch = Base64::symbol_to_char(symbol);
            assert_eq!(Base64::char_to_symbol(ch), u32::from(symbol));
        }
    }

    #[test]
    fn test_uri_safe_mapping() {
        assert_eq!(UriSafe::symbol_to_char(62), u16::from(b'+'));
        assert_eq!(UriSafe::symbol_to_char(63), u16::from(b'-'));

        for symbol in 0..64u16 {
            let ch = UriSafe::symbol_to_char(symbol);
            assert_eq!(UriSafe::char_to_symbol(ch), u32::from(symbol));
        }
    }

    #[test]
    fn test_unknown_characters_decode_as_zero() {
        assert_eq!(Base64::char_to_symbol(u16::from(b'=')), 0);
        assert_eq!(Base64::char_to_symbol(u16::from(b'-')), 0);
        assert_eq!(UriSafe::char_to_symbol(u16::from(b'/')), 0);
        assert_eq!(UriSafe::char_to_symbol(0x20AC), 0);
    }

    #[test]
    fn test_utf16_offset() {
        assert_eq!(Utf16::symbol_to_char(0), 32);
        assert_eq!(Utf16::symbol_to_char(0x7FFF), 32799);
        assert_eq!(Utf16::char_to_symbol(32799), 0x7FFF);
        // Below the offset the low bits are two's complement.
        assert_eq!(Utf16::char_to_symbol(31) & 0x7FFF, 0x7FFF);
    }

    #[test]
    fn test_base64_padding() {
        let mut output: Vec<u16> = "IJA".encode_utf16().collect();
        Base64::pad(&mut output);
        assert_eq!(String::from_utf16(&output).unwrap(), "IJA=");

        let mut aligned: Vec<u16> = "IIIV7SNI".encode_utf16().collect();
        Base64::pad(&mut aligned);
        assert_eq!(aligned.len(), 8);

        let mut uri: Vec<u16> = "IJA".encode_utf16().collect();
        UriSafe::pad(&mut uri);
        assert_eq!(uri.len(), 3);
    }
}
