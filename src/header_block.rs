//! SPDY header blocks and the decompression seam.
//!
//! SYN_STREAM, SYN_REPLY, and HEADERS frames carry a zlib-compressed
//! block of name/value pairs. Decompression is stateful per connection
//! (the deflate dictionary spans frames), so the frame decoder owns a
//! single [`HeaderBlockDecoder`] and feeds it compressed bytes as they
//! arrive. This crate does not ship a decompressor; callers plug in
//! their own implementation, which also enforces the decompressed-size
//! budget.

/// Error type returned by a [`HeaderBlockDecoder`]; surfaced to the
/// caller unchanged.
pub type HeaderBlockError = Box<dyn std::error::Error + Send + Sync>;

/// Stateful decoder for compressed header blocks.
///
/// One instance serves all header blocks on a connection, in wire
/// order. The frame decoder calls `decode` with successive slices of
/// compressed bytes, `reset` at each block boundary, and `end` exactly
/// once when the connection is torn down.
pub trait HeaderBlockDecoder {
    /// Decode a chunk of compressed header-block bytes into `block`.
    ///
    /// The implementation consumes some prefix of `compressed`
    /// (possibly none, possibly all) by advancing the slice, and
    /// appends decoded name/value pairs to `block`. A malformed stream
    /// or an oversized block is reported by flagging `block` invalid or
    /// truncated rather than by returning an error; `Err` is reserved
    /// for failures the decoder cannot attribute to the block itself.
    fn decode(
        &mut self,
        compressed: &mut &[u8],
        block: &mut SpdyHeaderBlock,
    ) -> Result<(), HeaderBlockError>;

    /// Discard per-block state. Called once per completed header block.
    fn reset(&mut self);

    /// Release all resources. Called exactly once, at teardown.
    fn end(&mut self);
}

/// Decoded name/value pairs of one header block, in wire order.
///
/// Names may repeat; `get` returns the first occurrence. The `invalid`
/// and `truncated` flags are one-way: once set by the decompressor they
/// stick for the lifetime of the block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpdyHeaderBlock {
    entries: Vec<(String, String)>,
    invalid: bool,
    truncated: bool,
}

impl SpdyHeaderBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name/value pair.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value recorded for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All pairs, in the order they were decoded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mark the block as carrying a malformed compressed stream or value.
    pub fn set_invalid(&mut self) {
        self.invalid = true;
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Mark the block as cut short by the decompressed-size budget.
    pub fn set_truncated(&mut self) {
        self.truncated = true;
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}
