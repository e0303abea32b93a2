//! # Splice Module
//!
//! Locates the marker in a file's content and builds the rewritten content:
//! the header followed by everything from the first marker occurrence on.
//! Content is handled as raw bytes so non-UTF-8 sources are preserved exactly.

/// Returns the byte offset of the first occurrence of `marker` in `content`.
///
/// An empty marker matches at offset 0.
pub fn find_marker(content: &[u8], marker: &[u8]) -> Option<usize> {
  if marker.is_empty() {
    return Some(0);
  }
  if marker.len() > content.len() {
    return None;
  }
  content.windows(marker.len()).position(|window| window == marker)
}

/// Builds `header + content[pos..]` where `pos` is the first marker offset.
///
/// Returns `None` when the marker does not occur in `content`. Anything before
/// the marker is discarded.
pub fn splice_header(header: &[u8], content: &[u8], marker: &str) -> Option<Vec<u8>> {
  let pos = find_marker(content, marker.as_bytes())?;
  let tail = &content[pos..];

  let mut spliced = Vec::with_capacity(header.len() + tail.len());
  spliced.extend_from_slice(header);
  spliced.extend_from_slice(tail);
  Some(spliced)
}
