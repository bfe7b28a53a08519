//! Info command implementation.

use super::Format;
use super::compress::compress_as;
use super::decompress::decompress_as;
use crate::utils::{CliResult, read_input_text, savings_percent};
use serde::Serialize;
use std::path::Path;

/// Size of the input in one compressed format.
#[derive(Debug, Serialize)]
pub struct FormatReport {
    /// Format name.
    pub format: &'static str,
    /// Compressed size in bytes as written by `compress`.
    pub bytes: usize,
    /// Space saved relative to the input, in percent.
    pub savings_percent: f64,
    /// Whether decompressing reproduced the input.
    pub roundtrip: bool,
}

/// Compression report for one input.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    /// Input size in bytes (UTF-8).
    pub bytes: usize,
    /// Input size in UTF-16 code units.
    pub utf16_units: usize,
    /// One entry per format.
    pub formats: Vec<FormatReport>,
}

/// Compress `text` with every format and measure the results.
pub fn build_report(text: &str) -> CliResult<InfoReport> {
    let formats = Format::ALL
        .iter()
        .map(|&format| -> CliResult<FormatReport> {
            let data = compress_as(format, text);
            let roundtrip = decompress_as(format, &data)?.as_deref() == Some(text)
                // Empty text compresses to empty output, which decodes as a failure.
                || (text.is_empty() && data.is_empty());
            Ok(FormatReport {
                format: format.name(),
                bytes: data.len(),
                savings_percent: savings_percent(text.len(), data.len()),
                roundtrip,
            })
        })
        .collect::<CliResult<Vec<_>>>()?;

    Ok(InfoReport {
        bytes: text.len(),
        utf16_units: text.encode_utf16().count(),
        formats,
    })
}

pub fn cmd_info(input: Option<&Path>, json: bool) -> CliResult<()> {
    let text = read_input_text(input)?;
    let report = build_report(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Compression Information");
    println!("=======================");
    match input {
        Some(path) => println!("Input: {}", path.display()),
        None => println!("Input: <stdin>"),
    }
    println!("Size: {} bytes ({} UTF-16 units)", report.bytes, report.utf16_units);
    println!();
    println!("  {:<8} {:>10} {:>9} {:>10}", "Format", "Bytes", "Saved", "Roundtrip");
    for entry in &report.formats {
        println!(
            "  {:<8} {:>10} {:>8.1}% {:>10}",
            entry.format,
            entry.bytes,
            entry.savings_percent,
            if entry.roundtrip { "ok" } else { "FAILED" }
        );
    }

    Ok(())
}
