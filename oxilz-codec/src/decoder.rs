//! Dictionary decoder (decompression).
//!
//! The decoder mirrors the encoder's code-width schedule step for step: one
//! extra step for every literal, one for every dictionary entry it creates.

use crate::dictionary::DecoderDictionary;
use crate::width::CodeWidth;
use oxilz_core::{
    Alphabet, BitUnpacker, END_OF_STREAM, LITERAL_8, LITERAL_16, LzError, Result,
};

/// Dictionary decoder for decompression.
#[derive(Debug)]
pub struct LzDecoder {
    dict: DecoderDictionary,
    width: CodeWidth,
}

impl LzDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self {
            dict: DecoderDictionary::new(),
            width: CodeWidth::decoder(),
        }
    }

    /// Decode characters of alphabet `A` back into UTF-16 code units.
    ///
    /// # Errors
    ///
    /// - [`LzError::InvalidCode`] if the stream references a code the
    ///   encoder cannot have assigned yet
    /// - [`LzError::Truncated`] if the input ends before the end-of-stream
    ///   code
    pub fn decode<A: Alphabet>(&mut self, input: &[u16]) -> Result<Vec<u16>> {
        self.reset();
        let mut reader = BitUnpacker::<A>::new(input);

        // The stream opens with a literal at the initial 2-bit width.
        let first = match reader.read_bits(2) {
            LITERAL_8 => reader.read_bits(8) as u16,
            LITERAL_16 => reader.read_bits(16) as u16,
            END_OF_STREAM => return Ok(Vec::new()),
            code => return Err(LzError::invalid_code(code, self.dict.next_code())),
        };
        self.dict.push(vec![first]);

        let mut previous = vec![first];
        let mut output = vec![first];

        loop {
            if reader.is_exhausted() {
                return Err(LzError::truncated(
                    reader.chars_consumed(),
                    reader.input_len(),
                ));
            }

            let code = match reader.read_bits(self.width.bits()) {
                END_OF_STREAM => return Ok(output),
                marker @ (LITERAL_8 | LITERAL_16) => {
                    let bits = if marker == LITERAL_8 { 8 } else { 16 };
                    let unit = reader.read_bits(bits) as u16;
                    let code = self.dict.push(vec![unit]);
                    self.width.grow();
                    code
                }
                code => code,
            };

            let entry = match self.dict.get(code) {
                Some(entry) => entry.to_vec(),
                // The encoder emitted the entry it created one step earlier.
                None if code == self.dict.next_code() => {
                    let mut entry = previous.clone();
                    entry.push(previous[0]);
                    entry
                }
                None => {
                    return Err(LzError::invalid_code(code, self.dict.next_code()));
                }
            };

            output.extend_from_slice(&entry);

            previous.push(entry[0]);
            self.dict.push(previous);
            self.width.grow();

            previous = entry;
        }
    }

    /// Reset the decoder to its initial state.
    pub fn reset(&mut self) {
        self.dict = DecoderDictionary::new();
        self.width = CodeWidth::decoder();
    }
}

impl Default for LzDecoder {
    fn default() -> Self {
        Self::new()
    }
}
