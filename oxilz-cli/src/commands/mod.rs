//! Command implementations for OxiLZ CLI.

pub mod compress;
pub mod decompress;
pub mod info;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use info::cmd_info;

use clap::ValueEnum;

/// Compressed representation to produce or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// 15 bits per character, printable UTF-16 text
    Wide,
    /// Standard Base64 with `=` padding (default)
    #[default]
    Base64,
    /// URI-safe Base64 without padding
    Uri,
    /// Raw 16-bit units as big-endian bytes
    Bytes,
    /// `lz:`-marked Base64 paint layer
    Paint,
}

impl Format {
    /// All formats, in report order.
    pub const ALL: [Format; 5] = [
        Format::Wide,
        Format::Base64,
        Format::Uri,
        Format::Bytes,
        Format::Paint,
    ];

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Format::Wide => "wide",
            Format::Base64 => "base64",
            Format::Uri => "uri",
            Format::Bytes => "bytes",
            Format::Paint => "paint",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
