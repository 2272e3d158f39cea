//! Byte measurement and XML escaping.
//!
//! Everything that compares a size against the byte budget must go through
//! [`byte_length`]; character counts diverge from byte counts as soon as a
//! multi-byte code point appears.

/// Returns the size of `text` in encoded UTF-8 bytes.
///
/// This is the single size oracle used by the generator and by callers
/// doing budget arithmetic. A `&str` is UTF-8 by construction, so its
/// `len()` is exactly the encoded byte count.
///
/// # Examples
/// - `byte_length("abc")` is 3
/// - `byte_length("é")` is 2
/// - `byte_length("😀")` is 4
pub fn byte_length(text: &str) -> usize {
	text.len()
}

/// Replaces the five XML-reserved characters with their named entities.
///
/// `&` is replaced first so already-substituted entities are not rewritten
/// twice within a single pass.
///
/// # Notes
/// - Escaping can only grow the byte length (1 byte becomes up to 6),
///   never shrink it. The exact-trim logic relies on this.
/// - Not idempotent: escaping already-escaped text escapes the `&` of each
///   entity again. Apply exactly once per chunk.
pub fn escape_xml(text: &str) -> String {
	text.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&apos;")
}
