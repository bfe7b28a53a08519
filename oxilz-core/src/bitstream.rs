//! Bit packing over alphabet characters.
//!
//! Values are written to the stream least-significant bit first, while the
//! stream itself fills each output character from its most significant bit
//! down. A character carries [`Alphabet::BITS_PER_CHAR`] bits.
//!
//! # Example
//!
//! ```
//! use oxilz_core::alphabet::Utf16;
//! use oxilz_core::bitstream::{BitPacker, BitUnpacker};
//!
//! let mut packer = BitPacker::<Utf16>::new();
//! packer.write_bits(0b101, 3);
//! packer.write_bits(0xBEEF, 16);
//! let units = packer.finish();
//!
//! let mut unpacker = BitUnpacker::<Utf16>::new(&units);
//! assert_eq!(unpacker.read_bits(3), 0b101);
//! assert_eq!(unpacker.read_bits(16), 0xBEEF);
//! ```

use crate::alphabet::Alphabet;
use std::marker::PhantomData;

/// Accumulates variable-width values into alphabet characters.
#[derive(Debug)]
pub struct BitPacker<A: Alphabet> {
    /// Finished output characters.
    output: Vec<u16>,
    /// Bits of the character being assembled.
    value: u32,
    /// Number of bits already in `value`.
    position: u8,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> BitPacker<A> {
    /// Create a new packer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new packer with room for `capacity` output characters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            value: 0,
            position: 0,
            _alphabet: PhantomData,
        }
    }

    /// Write the low `count` bits of `value`, least significant first.
    pub fn write_bits(&mut self, mut value: u32, count: u8) {
        debug_assert!(count <= 32, "bit count {count} exceeds 32");

        for _ in 0..count {
            self.value = (self.value << 1) | (value & 1);
            value >>= 1;
            self.advance();
        }
    }

    /// Number of complete characters emitted so far.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// Whether no complete character has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Flush the partial character and apply the alphabet's padding.
    ///
    /// Zero bits are shifted in until a character is emitted, so a stream
    /// ending exactly on a character boundary still gains one all-zero
    /// character.
    pub fn finish(mut self) -> Vec<u16> {
        loop {
            self.value <<= 1;
            if self.position == A::BITS_PER_CHAR - 1 {
                self.output.push(A::symbol_to_char(self.value as u16));
                break;
            }
            self.position += 1;
        }

        A::pad(&mut self.output);
        self.output
    }

    #[inline]
    fn advance(&mut self) {
        if self.position == A::BITS_PER_CHAR - 1 {
            self.output.push(A::symbol_to_char(self.value as u16));
            self.position = 0;
            self.value = 0;
        } else {
            self.position += 1;
        }
    }
}

impl<A: Alphabet> Default for BitPacker<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads variable-width values back out of alphabet characters.
///
/// Reading past the end of the input yields zero bits; callers detect the
/// end with [`BitUnpacker::is_exhausted`].
#[derive(Debug)]
pub struct BitUnpacker<'a, A: Alphabet> {
    /// Input characters.
    input: &'a [u16],
    /// Symbol of the current character.
    value: u32,
    /// Mask of the next bit to read from `value`.
    position: u32,
    /// Index of the next character to pull.
    index: usize,
    _alphabet: PhantomData<A>,
}

impl<'a, A: Alphabet> BitUnpacker<'a, A> {
    /// Create a new unpacker positioned at the first character.
    pub fn new(input: &'a [u16]) -> Self {
        Self {
            input,
            value: Self::symbol_at(input, 0),
            position: A::reset_value(),
            index: 1,
            _alphabet: PhantomData,
        }
    }

    /// Read a `count`-bit value assembled least significant bit first.
    pub fn read_bits(&mut self, count: u8) -> u32 {
        debug_assert!(count <= 32, "bit count {count} exceeds 32");

        let mut bits = 0u32;
        for shift in 0..count {
            let bit = self.value & self.position;
            self.position >>= 1;
            if self.position == 0 {
                self.position = A::reset_value();
                self.value = Self::symbol_at(self.input, self.index);
                self.index += 1;
            }
            if bit != 0 {
                bits |= 1 << shift;
            }
        }
        bits
    }

    /// Whether the character pulled last lay beyond the input.
    pub fn is_exhausted(&self) -> bool {
        self.index > self.input.len()
    }

    /// Number of characters pulled so far.
    pub fn chars_consumed(&self) -> usize {
        self.index
    }

    /// Length of the input in characters.
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    fn symbol_at(input: &[u16], index: usize) -> u32 {
        input.get(index).map_or(0, |&unit| A::char_to_symbol(unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Base64, Raw, UriSafe, Utf16};

    #[test]
    fn test_roundtrip_mixed_widths() {
        let mut packer = BitPacker::<Base64>::new();
        packer.write_bits(0b10, 2);
        packer.write_bits(0b1100, 4);
        packer.write_bits(0xAB, 8);
        packer.write_bits(0x1234, 16);
        let data = packer.finish();

        let mut unpacker = BitUnpacker::<Base64>::new(&data);
        assert_eq!(unpacker.read_bits(2), 0b10);
        assert_eq!(unpacker.read_bits(4), 0b1100);
        assert_eq!(unpacker.read_bits(8), 0xAB);
        assert_eq!(unpacker.read_bits(16), 0x1234);
    }

    #[test]
    fn test_lsb_first_values_msb_first_characters() {
        // Value 1 in two bits is stream bits [1, 0]; they land in the top
        // of the first 6-bit character: 0b100000 = 32 = 'g'.
        let mut packer = BitPacker::<UriSafe>::new();
        packer.write_bits(1, 2);
        let data = packer.finish();
        assert_eq!(data, vec![u16::from(b'g')]);
    }

    #[test]
    fn test_finish_on_boundary_emits_zero_character() {
        let mut packer = BitPacker::<Raw>::new();
        packer.write_bits(0xFFFF, 16);
        assert_eq!(packer.len(), 1);
        let data = packer.finish();
        assert_eq!(data, vec![0xFFFF, 0]);
    }

    #[test]
    fn test_finish_pads_base64() {
        let mut packer = BitPacker::<Base64>::new();
        packer.write_bits(0, 3);
        let data = packer.finish();
        assert_eq!(String::from_utf16(&data).unwrap(), "A===");
    }

    #[test]
    fn test_reading_past_end_yields_zeros() {
        let data = vec![Utf16::symbol_to_char(0x7FFF)];
        let mut unpacker = BitUnpacker::<Utf16>::new(&data);
        assert!(!unpacker.is_exhausted());
        assert_eq!(unpacker.read_bits(15), 0x7FFF);
        assert_eq!(unpacker.chars_consumed(), 2);
        assert!(unpacker.is_exhausted());
        assert_eq!(unpacker.read_bits(8), 0);
    }

    #[test]
    fn test_empty_input_starts_exhausted() {
        let data: Vec<u16> = Vec::new();
        let mut unpacker = BitUnpacker::<Base64>::new(&data);
        assert!(unpacker.is_exhausted());
        assert_eq!(unpacker.read_bits(2), 0);
        assert_eq!(unpacker.input_len(), 0);
    }
}
