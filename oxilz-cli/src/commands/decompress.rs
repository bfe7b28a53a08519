//! Decompress command implementation.

use super::Format;
use crate::utils::{CliError, CliResult, read_input, write_output};
use oxilz_codec::{
    decompress, decompress_from_base64, decompress_from_bytes, decompress_from_uri_safe,
    decompress_paint_data,
};
use std::path::Path;
use tracing::{info, warn};

/// Decode `data` read from storage in `format`.
///
/// Text formats ignore trailing line breaks.
pub fn decompress_as(format: Format, data: &[u8]) -> CliResult<Option<String>> {
    if format == Format::Bytes {
        return Ok(decompress_from_bytes(data));
    }

    let text = std::str::from_utf8(data)?.trim_end_matches(['\r', '\n']);

    Ok(match format {
        Format::Wide => decompress(text),
        Format::Base64 => decompress_from_base64(text),
        Format::Uri => decompress_from_uri_safe(text),
        Format::Paint => decompress_paint_data(text),
        Format::Bytes => decompress_from_bytes(text.as_bytes()),
    })
}

pub fn cmd_decompress(
    input: Option<&Path>,
    output: Option<&Path>,
    format: Format,
) -> CliResult<()> {
    let data = read_input(input)?;
    let text = decompress_as(format, &data)?.ok_or(CliError::DecodeFailed {
        format: format.name(),
    })?;

    if text.is_empty() && !data.is_empty() {
        warn!(%format, "decoded to empty output; input may be truncated");
    }
    info!(
        %format,
        input_bytes = data.len(),
        output_bytes = text.len(),
        "decompressed"
    );

    write_output(output, text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompress_as_formats() {
        assert_eq!(
            decompress_as(Format::Base64, b"IJA=\n").unwrap().as_deref(),
            Some("A")
        );
        assert_eq!(decompress_as(Format::Uri, b"IJA").unwrap().as_deref(), Some("A"));
        assert_eq!(
            decompress_as(Format::Paint, b"lz:IJA=").unwrap().as_deref(),
            Some("A")
        );
        assert_eq!(
            decompress_as(Format::Paint, b"plain").unwrap().as_deref(),
            Some("plain")
        );
        assert_eq!(
            decompress_as(Format::Bytes, &[0x20, 0x82, 0x12, 0x00])
                .unwrap()
                .as_deref(),
            Some("AB")
        );
    }

    #[test]
    fn test_decompress_as_failures() {
        assert_eq!(decompress_as(Format::Base64, b"").unwrap(), None);
        assert_eq!(decompress_as(Format::Base64, b"ILg=").unwrap(), None);
        assert!(matches!(
            decompress_as(Format::Wide, &[0xFF, 0xFE]),
            Err(CliError::InvalidUtf8(_))
        ));
    }
}
