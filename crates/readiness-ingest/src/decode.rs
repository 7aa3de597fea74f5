//! Byte-to-text decoding with a legacy-encoding fallback.
//!
//! Exports arrive as UTF-8 most of the time, but spreadsheet tools still
//! write Windows-1252 now and then. A byte-order mark always wins; otherwise
//! UTF-8 is tried first and Windows-1252 (a superset of Latin-1's printable
//! range) is used when the bytes are not valid UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Decodes raw file bytes, returning the text and the encoding that was used.
pub fn decode_bytes(bytes: &[u8]) -> (Cow<'_, str>, &'static Encoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (text, encoding);
    }
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return (text, UTF_8);
    }
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    (text, WINDOWS_1252)
}
