//! # OxiLZ Core
//!
//! Core components for the OxiLZ text compression library.
//!
//! This crate provides the building blocks shared by the codec:
//!
//! - [`alphabet`]: Output alphabets mapping packed symbols to text code units
//! - [`bitstream`]: Bit packing into, and unpacking from, alphabet characters
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     oxilz compress / decompress / info                  │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Dictionary encoder/decoder, adapters, paint data    │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Alphabet + BitStream (this crate)                   │
//! │     Raw, UTF-16, Base64, URI-safe; BitPacker/Unpacker   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxilz_core::alphabet::Base64;
//! use oxilz_core::bitstream::{BitPacker, BitUnpacker};
//!
//! // Pack a 2-bit and an 8-bit value into Base64 characters
//! let mut packer = BitPacker::<Base64>::new();
//! packer.write_bits(0b10, 2);
//! packer.write_bits(0x41, 8);
//! let text = packer.finish();
//!
//! // Read them back
//! let mut unpacker = BitUnpacker::<Base64>::new(&text);
//! assert_eq!(unpacker.read_bits(2), 0b10);
//! assert_eq!(unpacker.read_bits(8), 0x41);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod bitstream;
pub mod error;

pub use alphabet::{Alphabet, Base64, Raw, UriSafe, Utf16};
pub use bitstream::{BitPacker, BitUnpacker};
pub use error::{LzError, Result};

/// Control code announcing an 8-bit literal.
pub const LITERAL_8: u32 = 0;

/// Control code announcing a 16-bit literal.
pub const LITERAL_16: u32 = 1;

/// Control code marking the end of the stream.
pub const END_OF_STREAM: u32 = 2;

/// First code assignable to a dictionary entry.
pub const FIRST_CODE: u32 = 3;
