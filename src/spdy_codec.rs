//! SPDY frame decoder.
//!
//! SPDY frames share a fixed 8-byte common header. Control frames set
//! the top bit of the first byte:
//!
//! ```text
//!  +-+----------------+----------------+
//!  |C|   Version (15) |    Type (16)   |
//!  +-+----------------+----------------+
//!  | Flags (8) |        Length (24)    |
//!  +-----------+-----------------------+
//! ```
//!
//! Data frames clear it and carry the stream identifier instead:
//!
//! ```text
//!  +-+------------------------------+
//!  |C|        Stream-ID (31)        |
//!  +-+------------------------------+
//!  | Flags (8) |     Length (24)    |
//!  +-----------+--------------------+
//! ```
//!
//! [`SpdyFrameDecoder`] is a sans-I/O pull parser: the caller owns the
//! receive buffer, appends bytes as they arrive off the transport, and
//! calls [`SpdyFrameDecoder::decode`] until it neither returns a frame
//! nor consumes input. Large DATA payloads are emitted as a series of
//! bounded chunks rather than buffered whole, and compressed header
//! blocks are streamed into the connection's [`HeaderBlockDecoder`] as
//! they arrive.

use bytes::{Buf, Bytes, BytesMut};
use std::collections::BTreeMap;

use crate::buf::{get_signed_int, get_unsigned_int, get_unsigned_medium, get_unsigned_short};
use crate::header_block::{HeaderBlockDecoder, SpdyHeaderBlock};

/// SPDY control frame types.
pub mod frame_type {
    /// Internal marker for data frames; never appears on the wire.
    pub const DATA: u16 = 0x0;
    pub const SYN_STREAM: u16 = 0x1;
    pub const SYN_REPLY: u16 = 0x2;
    pub const RST_STREAM: u16 = 0x3;
    pub const SETTINGS: u16 = 0x4;
    pub const PING: u16 = 0x6;
    pub const GOAWAY: u16 = 0x7;
    pub const HEADERS: u16 = 0x8;
    pub const WINDOW_UPDATE: u16 = 0x9;
}

/// SPDY frame flags.
pub mod flags {
    /// Last frame on this half-stream (data and control frames).
    pub const FIN: u8 = 0x01;
    /// SYN_STREAM only: the stream is unidirectional.
    pub const UNIDIRECTIONAL: u8 = 0x02;
    /// SETTINGS frame: clear previously persisted settings first.
    pub const SETTINGS_CLEAR: u8 = 0x01;
    /// SETTINGS entry: the peer should persist this value.
    pub const SETTINGS_PERSIST_VALUE: u8 = 0x01;
    /// SETTINGS entry: this value was persisted from a prior connection.
    pub const SETTINGS_PERSISTED: u8 = 0x02;
}

/// SPDY/3 settings identifiers.
pub mod settings_id {
    pub const UPLOAD_BANDWIDTH: u32 = 1;
    pub const DOWNLOAD_BANDWIDTH: u32 = 2;
    pub const ROUND_TRIP_TIME: u32 = 3;
    pub const MAX_CONCURRENT_STREAMS: u32 = 4;
    pub const CURRENT_CWND: u32 = 5;
    pub const DOWNLOAD_RETRANS_RATE: u32 = 6;
    pub const INITIAL_WINDOW_SIZE: u32 = 7;
    pub const CLIENT_CERTIFICATE_VECTOR_SIZE: u32 = 8;
}

/// Size of the common frame header.
pub const SPDY_HEADER_SIZE: usize = 8;

/// Default bound on the payload size of emitted data frames.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 8192;

const SPDY_HEADER_TYPE_OFFSET: usize = 2;
const SPDY_HEADER_FLAGS_OFFSET: usize = 4;
const SPDY_HEADER_LENGTH_OFFSET: usize = 5;

/// Protocol versions this decoder can be configured for.
///
/// SPDY/3.1 shares the wire version number with SPDY/3; the revisions
/// differ only in session-level flow control, which is out of a frame
/// decoder's hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpdyVersion {
    Spdy3,
    Spdy31,
}

impl SpdyVersion {
    /// The version number carried in control frame headers.
    pub fn version(self) -> u16 {
        match self {
            SpdyVersion::Spdy3 | SpdyVersion::Spdy31 => 3,
        }
    }
}

/// Errors reported by [`SpdyFrameDecoder::decode`].
///
/// Any error is terminal for the connection: the decoder stops framing
/// and discards all further input. The owner is expected to surface the
/// error and close the transport.
#[derive(Debug, thiserror::Error)]
pub enum SpdyError {
    /// A control frame carried a version other than the configured one.
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u16),
    /// A frame violated the framing grammar.
    #[error("Received invalid frame")]
    InvalidFrame,
    /// A data frame arrived on the session stream (stream-ID 0).
    #[error("Received invalid data frame")]
    InvalidDataFrame,
    /// The header-block decoder failed; the original error, unchanged.
    #[error("{0}")]
    HeaderBlock(Box<dyn std::error::Error + Send + Sync>),
}

/// One entry of a SETTINGS frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpdySettingValue {
    pub value: i32,
    /// The sender asks us to remember this value across connections.
    pub persist_value: bool,
    /// The sender is replaying a value we previously asked it to persist.
    pub persisted: bool,
}

/// Decoded SETTINGS frame: an ID-ordered set of unique entries.
///
/// When the same ID appears more than once in a frame, the first
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpdySettings {
    clear_previously_persisted: bool,
    entries: BTreeMap<u32, SpdySettingValue>,
}

impl SpdySettings {
    pub fn clear_previously_persisted(&self) -> bool {
        self.clear_previously_persisted
    }

    pub fn set_clear_previously_persisted(&mut self, clear: bool) {
        self.clear_previously_persisted = clear;
    }

    pub fn is_set(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: u32) -> Option<SpdySettingValue> {
        self.entries.get(&id).copied()
    }

    /// Record a value for `id`, replacing any existing entry.
    pub fn set(&mut self, id: u32, value: i32, persist_value: bool, persisted: bool) {
        self.entries.insert(
            id,
            SpdySettingValue {
                value,
                persist_value,
                persisted,
            },
        );
    }

    /// Entries in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, SpdySettingValue)> + '_ {
        self.entries.iter().map(|(id, v)| (*id, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A decoded SPDY frame.
///
/// DATA frames larger than the configured chunk size are delivered as
/// multiple `Data` events; `last` is set only on the final chunk of a
/// FIN-flagged frame. SYN_STREAM, SYN_REPLY, and HEADERS events are
/// delivered once their header block has fully passed through the
/// [`HeaderBlockDecoder`], with the decoded pairs attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpdyFrame {
    Data {
        stream_id: u32,
        data: Bytes,
        last: bool,
    },
    SynStream {
        stream_id: u32,
        associated_stream_id: u32,
        priority: u8,
        last: bool,
        unidirectional: bool,
        headers: SpdyHeaderBlock,
    },
    SynReply {
        stream_id: u32,
        last: bool,
        headers: SpdyHeaderBlock,
    },
    Headers {
        stream_id: u32,
        last: bool,
        headers: SpdyHeaderBlock,
    },
    RstStream {
        stream_id: u32,
        status_code: i32,
    },
    Settings(SpdySettings),
    Ping {
        id: i32,
    },
    GoAway {
        last_good_stream_id: u32,
        status_code: i32,
    },
    WindowUpdate {
        stream_id: u32,
        delta: u32,
    },
}

/// Common header fields of the frame currently being decoded.
///
/// `length` counts the payload bytes still to consume; it reaches zero
/// exactly at the frame boundary.
#[derive(Debug, Clone, Copy)]
struct FrameHeader {
    flags: u8,
    length: u32,
    version: u16,
    frame_type: u16,
    stream_id: u32,
}

/// Decoder state. Each payload-reading variant carries the header of
/// the frame it is consuming, so no per-frame field outlives its frame.
enum State {
    ReadCommonHeader,
    ReadControlFrame {
        hdr: FrameHeader,
    },
    ReadSettingsFrame {
        hdr: FrameHeader,
        /// Entries decoded so far; allocated once the entry count has
        /// been read and cross-checked against the frame length.
        settings: Option<SpdySettings>,
    },
    ReadHeaderBlockFrame {
        hdr: FrameHeader,
    },
    ReadHeaderBlock {
        hdr: FrameHeader,
        /// The frame awaiting its header block. `None` after an
        /// invalid or truncated block has already been emitted; the
        /// rest of the compressed payload is then drained unseen.
        frame: Option<SpdyFrame>,
    },
    ReadDataFrame {
        hdr: FrameHeader,
    },
    DiscardFrame {
        remaining: u32,
    },
    FrameError,
}

/// Streaming SPDY frame decoder.
///
/// Feed it a [`BytesMut`] of accumulated transport bytes via
/// [`decode`](Self::decode); each call consumes at most one parsing
/// step and returns at most one frame. Call in a loop until a call
/// neither returns a frame nor shrinks the buffer, then wait for more
/// input. Errors are terminal: after the first `Err`, subsequent calls
/// discard all input and return `Ok(None)`.
pub struct SpdyFrameDecoder<D: HeaderBlockDecoder> {
    spdy_version: u16,
    max_chunk_size: usize,
    header_block_decoder: D,
    state: State,
    ended: bool,
}

impl<D: HeaderBlockDecoder> SpdyFrameDecoder<D> {
    /// Create a decoder with the default chunk bound of
    /// [`DEFAULT_MAX_CHUNK_SIZE`].
    pub fn new(version: SpdyVersion, header_block_decoder: D) -> Self {
        Self::with_limits(version, DEFAULT_MAX_CHUNK_SIZE, header_block_decoder)
    }

    /// Create a decoder with an explicit chunk bound.
    ///
    /// # Panics
    ///
    /// Panics if `max_chunk_size` is zero.
    pub fn with_limits(
        version: SpdyVersion,
        max_chunk_size: usize,
        header_block_decoder: D,
    ) -> Self {
        assert!(
            max_chunk_size > 0,
            "max_chunk_size must be a positive integer: {max_chunk_size}"
        );
        Self {
            spdy_version: version.version(),
            max_chunk_size,
            header_block_decoder,
            state: State::ReadCommonHeader,
            ended: false,
        }
    }

    /// Run one decoding step against the accumulated input.
    ///
    /// May consume bytes from `buf` and may return a frame; both,
    /// either, or neither. A call that does neither is a fixpoint for
    /// the current input: supply more bytes before calling again.
    pub fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<SpdyFrame>, SpdyError> {
        match std::mem::replace(&mut self.state, State::ReadCommonHeader) {
            State::ReadCommonHeader => self.read_common_header(buf),
            State::ReadControlFrame { hdr } => self.read_control_frame(buf, hdr),
            State::ReadSettingsFrame { hdr, settings } => {
                self.read_settings_frame(buf, hdr, settings)
            }
            State::ReadHeaderBlockFrame { hdr } => self.read_header_block_frame(buf, hdr),
            State::ReadHeaderBlock { hdr, frame } => self.read_header_block(buf, hdr, frame),
            State::ReadDataFrame { hdr } => self.read_data_frame(buf, hdr),
            State::DiscardFrame { remaining } => {
                let n = buf.len().min(remaining as usize);
                buf.advance(n);
                let remaining = remaining - n as u32;
                self.state = if remaining == 0 {
                    State::ReadCommonHeader
                } else {
                    State::DiscardFrame { remaining }
                };
                Ok(None)
            }
            State::FrameError => {
                let n = buf.len();
                buf.advance(n);
                self.state = State::FrameError;
                Ok(None)
            }
        }
    }

    /// Final decoding step when the transport has closed.
    ///
    /// Identical to [`decode`](Self::decode), but finalizes the
    /// header-block decoder on every exit path. The decoder is
    /// unusable afterwards.
    pub fn decode_last(&mut self, buf: &mut BytesMut) -> Result<Option<SpdyFrame>, SpdyError> {
        let result = self.decode(buf);
        self.end_header_block_decoder();
        result
    }

    fn end_header_block_decoder(&mut self) {
        if !self.ended {
            self.ended = true;
            self.header_block_decoder.end();
        }
    }

    fn read_common_header(&mut self, buf: &mut BytesMut) -> Result<Option<SpdyFrame>, SpdyError> {
        if buf.len() < SPDY_HEADER_SIZE {
            self.state = State::ReadCommonHeader;
            return Ok(None);
        }

        let control = buf[0] & 0x80 != 0;
        let flags = buf[SPDY_HEADER_FLAGS_OFFSET];
        let length = get_unsigned_medium(buf, SPDY_HEADER_LENGTH_OFFSET);

        let (version, frame_type, stream_id) = if control {
            (
                get_unsigned_short(buf, 0) & 0x7fff,
                get_unsigned_short(buf, SPDY_HEADER_TYPE_OFFSET),
                0, // session stream
            )
        } else {
            // Data frames carry no version; assume the configured one.
            (self.spdy_version, frame_type::DATA, get_unsigned_int(buf, 0))
        };
        buf.advance(SPDY_HEADER_SIZE);

        let hdr = FrameHeader {
            flags,
            length,
            version,
            frame_type,
            stream_id,
        };

        // Version first, then per-type well-formedness.
        if hdr.version != self.spdy_version {
            self.state = State::FrameError;
            return Err(SpdyError::UnsupportedVersion(hdr.version));
        }
        if !is_valid_frame_header(&hdr) {
            self.state = State::FrameError;
            return Err(SpdyError::InvalidFrame);
        }

        match hdr.frame_type {
            frame_type::DATA => {
                if hdr.length == 0 {
                    if hdr.stream_id == 0 {
                        self.state = State::FrameError;
                        return Err(SpdyError::InvalidDataFrame);
                    }
                    // Zero-length data frames complete immediately.
                    self.state = State::ReadCommonHeader;
                    return Ok(Some(SpdyFrame::Data {
                        stream_id: hdr.stream_id,
                        data: Bytes::new(),
                        last: hdr.flags & flags::FIN != 0,
                    }));
                }
                self.state = State::ReadDataFrame { hdr };
            }
            frame_type::SYN_STREAM | frame_type::SYN_REPLY | frame_type::HEADERS => {
                self.state = State::ReadHeaderBlockFrame { hdr };
            }
            frame_type::SETTINGS => {
                self.state = State::ReadSettingsFrame {
                    hdr,
                    settings: None,
                };
            }
            frame_type::RST_STREAM
            | frame_type::PING
            | frame_type::GOAWAY
            | frame_type::WINDOW_UPDATE => {
                self.state = State::ReadControlFrame { hdr };
            }
            _ => {
                // Unknown control type: skip its payload silently.
                self.state = if hdr.length > 0 {
                    State::DiscardFrame {
                        remaining: hdr.length,
                    }
                } else {
                    State::ReadCommonHeader
                };
            }
        }
        Ok(None)
    }

    fn read_control_frame(
        &mut self,
        buf: &mut BytesMut,
        hdr: FrameHeader,
    ) -> Result<Option<SpdyFrame>, SpdyError> {
        // The header check pinned length to the exact payload size.
        if buf.len() < hdr.length as usize {
            self.state = State::ReadControlFrame { hdr };
            return Ok(None);
        }

        let frame = match hdr.frame_type {
            frame_type::RST_STREAM => {
                let stream_id = get_unsigned_int(buf, 0);
                let status_code = get_signed_int(buf, 4);
                buf.advance(8);
                if stream_id == 0 || status_code == 0 {
                    self.state = State::FrameError;
                    return Err(SpdyError::InvalidFrame);
                }
                SpdyFrame::RstStream {
                    stream_id,
                    status_code,
                }
            }
            frame_type::PING => {
                let id = get_signed_int(buf, 0);
                buf.advance(4);
                SpdyFrame::Ping { id }
            }
            frame_type::GOAWAY => {
                let last_good_stream_id = get_unsigned_int(buf, 0);
                let status_code = get_signed_int(buf, 4);
                buf.advance(8);
                SpdyFrame::GoAway {
                    last_good_stream_id,
                    status_code,
                }
            }
            frame_type::WINDOW_UPDATE => {
                let stream_id = get_unsigned_int(buf, 0);
                let delta = get_unsigned_int(buf, 4);
                buf.advance(8);
                if delta == 0 {
                    self.state = State::FrameError;
                    return Err(SpdyError::InvalidFrame);
                }
                SpdyFrame::WindowUpdate { stream_id, delta }
            }
            _ => unreachable!("not a fixed-shape control frame"),
        };

        self.state = State::ReadCommonHeader;
        Ok(Some(frame))
    }

    fn read_settings_frame(
        &mut self,
        buf: &mut BytesMut,
        mut hdr: FrameHeader,
        settings: Option<SpdySettings>,
    ) -> Result<Option<SpdyFrame>, SpdyError> {
        let mut settings = match settings {
            Some(settings) => settings,
            None => {
                if buf.len() < 4 {
                    self.state = State::ReadSettingsFrame {
                        hdr,
                        settings: None,
                    };
                    return Ok(None);
                }
                let num_entries = get_unsigned_int(buf, 0);
                buf.advance(4);
                hdr.length -= 4;

                // Each ID/value entry is 8 bytes.
                if hdr.length % 8 != 0 || hdr.length / 8 != num_entries {
                    self.state = State::FrameError;
                    return Err(SpdyError::InvalidFrame);
                }

                let mut settings = SpdySettings::default();
                settings
                    .set_clear_previously_persisted(hdr.flags & flags::SETTINGS_CLEAR != 0);
                settings
            }
        };

        let readable_entries = (buf.len() / 8).min((hdr.length / 8) as usize);
        for _ in 0..readable_entries {
            let entry_flags = buf[0];
            let id = get_unsigned_medium(buf, 1);
            let value = get_signed_int(buf, 4);
            buf.advance(8);

            if id == 0 {
                self.state = State::FrameError;
                return Err(SpdyError::InvalidFrame);
            }

            if !settings.is_set(id) {
                settings.set(
                    id,
                    value,
                    entry_flags & flags::SETTINGS_PERSIST_VALUE != 0,
                    entry_flags & flags::SETTINGS_PERSISTED != 0,
                );
            }
        }

        hdr.length -= 8 * readable_entries as u32;
        if hdr.length == 0 {
            self.state = State::ReadCommonHeader;
            return Ok(Some(SpdyFrame::Settings(settings)));
        }
        self.state = State::ReadSettingsFrame {
            hdr,
            settings: Some(settings),
        };
        Ok(None)
    }

    fn read_header_block_frame(
        &mut self,
        buf: &mut BytesMut,
        mut hdr: FrameHeader,
    ) -> Result<Option<SpdyFrame>, SpdyError> {
        let frame = match hdr.frame_type {
            frame_type::SYN_STREAM => {
                if buf.len() < 10 {
                    self.state = State::ReadHeaderBlockFrame { hdr };
                    return Ok(None);
                }
                let stream_id = get_unsigned_int(buf, 0);
                let associated_stream_id = get_unsigned_int(buf, 4);
                let priority = buf[8] >> 5 & 0x07;
                buf.advance(10);
                hdr.length -= 10;

                if stream_id == 0 {
                    self.state = State::FrameError;
                    return Err(SpdyError::InvalidFrame);
                }
                SpdyFrame::SynStream {
                    stream_id,
                    associated_stream_id,
                    priority,
                    last: hdr.flags & flags::FIN != 0,
                    unidirectional: hdr.flags & flags::UNIDIRECTIONAL != 0,
                    headers: SpdyHeaderBlock::new(),
                }
            }
            frame_type::SYN_REPLY | frame_type::HEADERS => {
                if buf.len() < 4 {
                    self.state = State::ReadHeaderBlockFrame { hdr };
                    return Ok(None);
                }
                let stream_id = get_unsigned_int(buf, 0);
                buf.advance(4);
                hdr.length -= 4;

                if stream_id == 0 {
                    self.state = State::FrameError;
                    return Err(SpdyError::InvalidFrame);
                }
                let last = hdr.flags & flags::FIN != 0;
                if hdr.frame_type == frame_type::SYN_REPLY {
                    SpdyFrame::SynReply {
                        stream_id,
                        last,
                        headers: SpdyHeaderBlock::new(),
                    }
                } else {
                    SpdyFrame::Headers {
                        stream_id,
                        last,
                        headers: SpdyHeaderBlock::new(),
                    }
                }
            }
            _ => unreachable!("not a header-block frame"),
        };

        if hdr.length == 0 {
            // No header block body; the decompressor is not involved.
            self.state = State::ReadCommonHeader;
            return Ok(Some(frame));
        }
        self.state = State::ReadHeaderBlock {
            hdr,
            frame: Some(frame),
        };
        Ok(None)
    }

    fn read_header_block(
        &mut self,
        buf: &mut BytesMut,
        mut hdr: FrameHeader,
        frame: Option<SpdyFrame>,
    ) -> Result<Option<SpdyFrame>, SpdyError> {
        if buf.is_empty() {
            self.state = State::ReadHeaderBlock { hdr, frame };
            return Ok(None);
        }

        let mut frame = match frame {
            Some(frame) => frame,
            None => {
                // The frame was already emitted as invalid/truncated;
                // drain the rest of the block without decoding it.
                let n = buf.len().min(hdr.length as usize);
                buf.advance(n);
                hdr.length -= n as u32;
                if hdr.length == 0 {
                    self.header_block_decoder.reset();
                    self.state = State::ReadCommonHeader;
                } else {
                    self.state = State::ReadHeaderBlock { hdr, frame: None };
                }
                return Ok(None);
            }
        };

        let slice_len = buf.len().min(hdr.length as usize);
        let mut compressed: &[u8] = &buf[..slice_len];
        if let Err(e) = self
            .header_block_decoder
            .decode(&mut compressed, header_block_mut(&mut frame))
        {
            self.state = State::FrameError;
            return Err(SpdyError::HeaderBlock(e));
        }
        let consumed = slice_len - compressed.len();
        buf.advance(consumed);
        hdr.length -= consumed as u32;

        let block = header_block_mut(&mut frame);
        if block.is_invalid() || block.is_truncated() {
            if hdr.length == 0 {
                self.header_block_decoder.reset();
                self.state = State::ReadCommonHeader;
            } else {
                self.state = State::ReadHeaderBlock { hdr, frame: None };
            }
            return Ok(Some(frame));
        }

        if hdr.length == 0 {
            self.header_block_decoder.reset();
            self.state = State::ReadCommonHeader;
            return Ok(Some(frame));
        }
        self.state = State::ReadHeaderBlock {
            hdr,
            frame: Some(frame),
        };
        Ok(None)
    }

    fn read_data_frame(
        &mut self,
        buf: &mut BytesMut,
        mut hdr: FrameHeader,
    ) -> Result<Option<SpdyFrame>, SpdyError> {
        if hdr.stream_id == 0 {
            self.state = State::FrameError;
            return Err(SpdyError::InvalidDataFrame);
        }

        // Emit chunks no larger than the configured bound, and only
        // once a full chunk is readable.
        let chunk = self.max_chunk_size.min(hdr.length as usize);
        if buf.len() < chunk {
            self.state = State::ReadDataFrame { hdr };
            return Ok(None);
        }

        let data = buf.split_to(chunk).freeze();
        hdr.length -= chunk as u32;

        let last = hdr.length == 0 && hdr.flags & flags::FIN != 0;
        self.state = if hdr.length == 0 {
            State::ReadCommonHeader
        } else {
            State::ReadDataFrame { hdr }
        };
        Ok(Some(SpdyFrame::Data {
            stream_id: hdr.stream_id,
            data,
            last,
        }))
    }
}

impl<D: HeaderBlockDecoder> Drop for SpdyFrameDecoder<D> {
    fn drop(&mut self) {
        self.end_header_block_decoder();
    }
}

fn header_block_mut(frame: &mut SpdyFrame) -> &mut SpdyHeaderBlock {
    match frame {
        SpdyFrame::SynStream { headers, .. }
        | SpdyFrame::SynReply { headers, .. }
        | SpdyFrame::Headers { headers, .. } => headers,
        _ => unreachable!("frame does not carry a header block"),
    }
}

fn is_valid_frame_header(hdr: &FrameHeader) -> bool {
    match hdr.frame_type {
        // The session-stream check lives on the data path, where it
        // reports as an invalid data frame.
        frame_type::DATA => true,
        frame_type::SYN_STREAM => hdr.length >= 10,
        frame_type::SYN_REPLY => hdr.length >= 4,
        frame_type::RST_STREAM => hdr.flags == 0 && hdr.length == 8,
        frame_type::SETTINGS => hdr.length >= 4,
        frame_type::PING => hdr.length == 4,
        frame_type::GOAWAY => hdr.length == 8,
        frame_type::HEADERS => hdr.length >= 4,
        frame_type::WINDOW_UPDATE => hdr.length == 8,
        _ => true,
    }
}
