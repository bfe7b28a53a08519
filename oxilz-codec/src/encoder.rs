//! Dictionary encoder (compression).

use crate::dictionary::EncoderDictionary;
use crate::width::CodeWidth;
use oxilz_core::{Alphabet, BitPacker, END_OF_STREAM, LITERAL_8, LITERAL_16};
use tracing::trace;

/// The longest dictionary match found so far.
#[derive(Debug, Clone, Copy)]
struct Phrase {
    /// Dictionary code of the phrase.
    code: u32,
    /// The unit, when the phrase is a single code unit.
    unit: Option<u16>,
}

/// Dictionary encoder for compression.
///
/// An encoder runs one pass; [`LzEncoder::encode`] resets it first, so an
/// instance can be reused.
#[derive(Debug)]
pub struct LzEncoder {
    dict: EncoderDictionary,
    width: CodeWidth,
}

impl LzEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self {
            dict: EncoderDictionary::new(),
            width: CodeWidth::encoder(),
        }
    }

    /// Encode UTF-16 code units into characters of alphabet `A`.
    ///
    /// # Algorithm
    ///
    /// 1. Extend the current phrase while `phrase + unit` is known
    /// 2. Otherwise emit the phrase: as a literal the first time a unit is
    ///    sent, as its dictionary code after that
    /// 3. Add `phrase + unit` to the dictionary and restart from `unit`
    /// 4. Emit the final phrase and the end-of-stream code
    ///
    /// Empty input produces empty output.
    pub fn encode<A: Alphabet>(&mut self, input: &[u16]) -> Vec<u16> {
        self.reset();

        if input.is_empty() {
            return Vec::new();
        }

        let mut packer = BitPacker::<A>::with_capacity(input.len() / 2);
        let mut current: Option<Phrase> = None;

        for &unit in input {
            let unit_code = self.dict.intern_unit(unit);

            let Some(phrase) = current else {
                current = Some(Phrase {
                    code: unit_code,
                    unit: Some(unit),
                });
                continue;
            };

            if let Some(code) = self.dict.find_phrase(phrase.code, unit) {
                current = Some(Phrase { code, unit: None });
                continue;
            }

            self.emit_phrase(&mut packer, phrase);
            self.dict.add_phrase(phrase.code, unit);
            current = Some(Phrase {
                code: unit_code,
                unit: Some(unit),
            });
        }

        if let Some(phrase) = current {
            self.emit_phrase(&mut packer, phrase);
        }

        packer.write_bits(END_OF_STREAM, self.width.bits());
        trace!(
            codes = self.dict.next_code(),
            bits = self.width.bits(),
            "stream encoded"
        );
        packer.finish()
    }

    /// Reset the encoder to its initial state.
    pub fn reset(&mut self) {
        self.dict = EncoderDictionary::new();
        self.width = CodeWidth::encoder();
    }

    /// Emit a phrase and account for the dictionary entry that follows it.
    fn emit_phrase<A: Alphabet>(&mut self, packer: &mut BitPacker<A>, phrase: Phrase) {
        match phrase.unit {
            Some(unit) if self.dict.take_pending(unit) => {
                if unit < 256 {
                    self.emit_token(packer, LITERAL_8, Some((u32::from(unit), 8)));
                } else {
                    self.emit_token(packer, LITERAL_16, Some((u32::from(unit), 16)));
                }
            }
            _ => self.emit_token(packer, phrase.code, None),
        }

        // Step for the entry created after every emitted phrase.
        self.width.grow();
    }

    /// Write `code` at the current width plus an optional raw payload, then
    /// step the width countdown.
    fn emit_token<A: Alphabet>(
        &mut self,
        packer: &mut BitPacker<A>,
        code: u32,
        payload: Option<(u32, u8)>,
    ) {
        packer.write_bits(code, self.width.bits());
        if let Some((value, bits)) = payload {
            packer.write_bits(value, bits);
            self.width.grow();
        }
    }
}

impl Default for LzEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::LzDecoder;
    use oxilz_core::{Base64, Utf16};

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_encode_empty() {
        let mut encoder = LzEncoder::new();
        assert!(encoder.encode::<Base64>(&[]).is_empty());
    }

    #[test]
    fn test_encode_single_unit() {
        let mut encoder = LzEncoder::new();
        let compressed = encoder.encode::<Base64>(&units("A"));
        assert_eq!(String::from_utf16(&compressed).unwrap(), "IJA=");
    }

    #[test]
    fn test_encode_simple() {
        let mut encoder = LzEncoder::new();
        let original = units("TOBEORNOTTOBEORTOBEORNOT");
        let compressed = encoder.encode::<Base64>(&original);
        assert_eq!(
            String::from_utf16(&compressed).unwrap(),
            "CoeQQgoiBKByLFJGSpwUA==="
        );

        let mut decoder = LzDecoder::new();
        assert_eq!(decoder.decode::<Base64>(&compressed).unwrap(), original);
    }

    #[test]
    fn test_encode_wide_units() {
        let mut encoder = LzEncoder::new();
        let original = units("日本語テキスト");
        let compressed = encoder.encode::<Utf16>(&original);
        assert_eq!(
            compressed,
            vec![21780, 26761, 26287, 5432, 12710, 8948, 6451, 20712, 2470, 4128]
        );
    }

    #[test]
    fn test_encoder_reuse() {
        let mut encoder = LzEncoder::new();
        let first = encoder.encode::<Base64>(&units("ABABABABABABABABAB"));
        let second = encoder.encode::<Base64>(&units("ABABABABABABABABAB"));
        assert_eq!(first, second);
        assert_eq!(String::from_utf16(&first).unwrap(), "IIIV7SNI");
    }

    #[test]
    fn test_encode_repeating() {
        let mut encoder = LzEncoder::new();
        let original = vec![u16::from(b'X'); 1000];
        let compressed = encoder.encode::<Base64>(&original);

        // Highly repetitive data should compress well
        assert!(compressed.len() < original.len() / 10);

        let mut decoder = LzDecoder::new();
        assert_eq!(decoder.decode::<Base64>(&compressed).unwrap(), original);
    }
}
