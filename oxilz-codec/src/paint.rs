//! Marker-prefixed Base64 for stored paint layers.
//!
//! Painted map layers are stored as data URLs inside save files. Compressed
//! values carry the [`PAINT_DATA_MARKER`] prefix; anything without it is a
//! plain, uncompressed value, so both kinds can share one storage field.

use crate::{compress_to_base64, decompress_from_base64};

/// Prefix identifying a compressed paint layer.
pub const PAINT_DATA_MARKER: &str = "lz:";

/// Whether `value` carries the compressed paint-data marker.
pub fn is_compressed_paint_data(value: &str) -> bool {
    value.starts_with(PAINT_DATA_MARKER)
}

/// Compress a paint layer data URL for storage.
///
/// Absent and empty values pass through unchanged, as do values that are
/// already marked, so the operation is idempotent.
///
/// # Example
///
/// ```rust
/// use oxilz_codec::compress_paint_data;
///
/// let once = compress_paint_data("data:image/png;base64,AAAA").unwrap();
/// assert!(once.starts_with("lz:"));
/// assert_eq!(compress_paint_data(once.as_str()), Some(once.clone()));
/// assert_eq!(compress_paint_data(None), None);
/// ```
pub fn compress_paint_data<'a>(data_url: impl Into<Option<&'a str>>) -> Option<String> {
    let data_url = data_url.into()?;
    if data_url.is_empty() || is_compressed_paint_data(data_url) {
        return Some(data_url.to_owned());
    }

    let compressed = compress_to_base64(data_url);
    let mut marked = String::with_capacity(PAINT_DATA_MARKER.len() + compressed.len());
    marked.push_str(PAINT_DATA_MARKER);
    marked.push_str(&compressed);
    Some(marked)
}

/// Restore a stored paint layer.
///
/// Marked values are decoded; unmarked values are returned unchanged. A
/// marked value that fails to decode yields `None`.
///
/// # Example
///
/// ```rust
/// use oxilz_codec::{compress_paint_data, decompress_paint_data};
///
/// let stored = compress_paint_data("data:image/png;base64,AAAA").unwrap();
/// assert_eq!(
///     decompress_paint_data(stored.as_str()).as_deref(),
///     Some("data:image/png;base64,AAAA")
/// );
/// assert_eq!(
///     decompress_paint_data("raw-unprefixed-string").as_deref(),
///     Some("raw-unprefixed-string")
/// );
/// ```
pub fn decompress_paint_data<'a>(value: impl Into<Option<&'a str>>) -> Option<String> {
    let value = value.into()?;
    match value.strip_prefix(PAINT_DATA_MARKER) {
        Some(payload) => decompress_from_base64(payload),
        None => Some(value.to_owned()),
    }
}
