//! Size-bounded packing of a single segment
//!
//! Breaks text into chunks of at most `max_size` characters, cutting at the
//! rightmost delimiter at or before character index `max_size` and falling
//! back to a hard cut when there is none.

/// Byte offset of the `n`th character, or `text.len()` if shorter
fn char_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(i, _)| i)
}

/// Split `text` into chunks of at most `max_size` characters
///
/// A delimiter sitting exactly at index `max_size` still counts, giving a
/// chunk of exactly `max_size` characters. One leading `delimiter` is
/// dropped before every cut, so later chunks never start with it. A
/// `max_size` of 0 is treated as 1; an empty `delimiter` only ever produces
/// hard cuts.
///
/// ```rust
/// use utter_core::packer::pack;
///
/// assert_eq!(pack("abc def ghi jkl", " ", 7), vec!["abc def", "ghi jkl"]);
/// assert_eq!(pack("abcdefghij", " ", 4), vec!["abcd", "efgh", "ij"]);
/// ```
pub fn pack(text: &str, delimiter: &str, max_size: usize) -> Vec<String> {
    let max_size = max_size.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    loop {
        if !delimiter.is_empty() {
            if let Some(stripped) = rest.strip_prefix(delimiter) {
                rest = stripped;
            }
        }

        let limit = char_offset(rest, max_size);
        if limit == rest.len() {
            chunks.push(rest.to_string());
            break;
        }

        let cut = if delimiter.is_empty() {
            limit
        } else {
            let window = char_offset(rest, max_size + 1);
            rest[..window].rfind(delimiter).unwrap_or(limit)
        };

        chunks.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }

    tracing::trace!(chunks = chunks.len(), max_size, "packed segment");
    chunks
}
