//! spdy-sans-io: A minimal, sans-I/O SPDY frame decoder
//!
//! This crate provides a synchronous, incremental decoder for the SPDY
//! framing layer, designed for transports that own their read loop and
//! cannot hand control to an async runtime.
//!
//! # Features
//!
//! - **Sans-I/O Design**: No async runtime dependencies (no tokio)
//! - **Incremental**: Tolerates arbitrarily fragmented input without
//!   blocking or over-reading
//! - **Bounded Memory**: Large DATA payloads are emitted as chunks no
//!   larger than a configurable bound, never buffered whole
//! - **Streaming Header Blocks**: Compressed SYN_STREAM / SYN_REPLY /
//!   HEADERS payloads are fed to a pluggable decompressor as they
//!   arrive, with its consumption accounted byte-for-byte
//! - **Strict Framing**: Precise per-type validity checks with terminal
//!   error semantics
//!
//! # Quick Start
//!
//! ```rust
//! use bytes::BytesMut;
//! use spdy_sans_io::{
//!     HeaderBlockDecoder, HeaderBlockError, SpdyFrame, SpdyFrameDecoder, SpdyHeaderBlock,
//!     SpdyVersion,
//! };
//!
//! // Stand-in for a real zlib header-block decompressor.
//! struct NullHeaders;
//!
//! impl HeaderBlockDecoder for NullHeaders {
//!     fn decode(
//!         &mut self,
//!         compressed: &mut &[u8],
//!         _block: &mut SpdyHeaderBlock,
//!     ) -> Result<(), HeaderBlockError> {
//!         *compressed = &[];
//!         Ok(())
//!     }
//!     fn reset(&mut self) {}
//!     fn end(&mut self) {}
//! }
//!
//! let mut decoder = SpdyFrameDecoder::new(SpdyVersion::Spdy3, NullHeaders);
//!
//! // A PING frame, as read off the transport.
//! let mut buf = BytesMut::from(
//!     &[0x80, 0x03, 0x00, 0x06, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x2a][..],
//! );
//!
//! // Drive the decoder until it neither returns a frame nor consumes input.
//! let mut frames = Vec::new();
//! loop {
//!     let before = buf.len();
//!     match decoder.decode(&mut buf).unwrap() {
//!         Some(frame) => frames.push(frame),
//!         None if buf.len() == before => break,
//!         None => {}
//!     }
//! }
//!
//! assert!(matches!(frames[0], SpdyFrame::Ping { id: 42 }));
//! ```
//!
//! # Architecture
//!
//! This crate is intentionally minimal. It provides:
//! - Frame decoding (bytes → [`SpdyFrame`] events)
//! - The [`HeaderBlockDecoder`] seam for plugging in header-block
//!   decompression
//!
//! It does NOT provide:
//! - Frame encoding (decode-only)
//! - TCP/TLS transport (you provide the bytes)
//! - Header-block decompression (zlib state, dictionary, and size
//!   budgets live behind the [`HeaderBlockDecoder`] trait)
//! - Session logic (stream states, flow control, multiplexing)
//!
//! # Use Cases
//!
//! - **Protocol bridges**: terminating legacy SPDY traffic in front of
//!   an HTTP/2 or HTTP/1.1 backend
//! - **Traffic inspection**: decoding captured SPDY streams without a
//!   network stack
//! - **Testing utilities**: exercising SPDY peers without async
//!   complexity

pub mod header_block;
pub mod spdy_codec;

mod buf;

pub use header_block::{HeaderBlockDecoder, HeaderBlockError, SpdyHeaderBlock};
pub use spdy_codec::{
    flags, frame_type, settings_id, SpdyError, SpdyFrame, SpdyFrameDecoder, SpdySettingValue,
    SpdySettings, SpdyVersion, DEFAULT_MAX_CHUNK_SIZE, SPDY_HEADER_SIZE,
};
