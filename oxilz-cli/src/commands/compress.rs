//! Compress command implementation.

use super::Format;
use crate::utils::{CliResult, read_input_text, savings_percent, write_output};
use oxilz_codec::{
    compress, compress_paint_data, compress_to_base64, compress_to_bytes, compress_to_uri_safe,
};
use std::path::Path;
use tracing::info;

/// Compress `text` into the bytes written for `format`.
pub fn compress_as(format: Format, text: &str) -> Vec<u8> {
    match format {
        Format::Wide => compress(text).into_bytes(),
        Format::Base64 => compress_to_base64(text).into_bytes(),
        Format::Uri => compress_to_uri_safe(text).into_bytes(),
        Format::Bytes => compress_to_bytes(text),
        Format::Paint => compress_paint_data(text).unwrap_or_default().into_bytes(),
    }
}

pub fn cmd_compress(input: Option<&Path>, output: Option<&Path>, format: Format) -> CliResult<()> {
    let text = read_input_text(input)?;
    let data = compress_as(format, &text);

    info!(
        %format,
        input_bytes = text.len(),
        output_bytes = data.len(),
        savings_percent = savings_percent(text.len(), data.len()),
        "compressed"
    );

    write_output(output, &data)
}
