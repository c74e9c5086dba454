//! Tests for the fixed-shape control frames and SETTINGS.

use spdy_sans_io::{flags, frame_type, settings_id, SpdyFrame, SpdyFrameDecoder, SpdyVersion};

use bytes::BytesMut;

use crate::common::{control_frame, decode_all, drain, MockHeaderDecoder};

fn decoder() -> SpdyFrameDecoder<MockHeaderDecoder> {
    SpdyFrameDecoder::new(SpdyVersion::Spdy3, MockHeaderDecoder::new())
}

#[test]
fn ping_frame() {
    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &[0x80, 0x03, 0x00, 0x06, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x2a],
    )
    .unwrap();
    assert_eq!(frames, vec![SpdyFrame::Ping { id: 42 }]);
}

#[test]
fn ping_id_is_bit_exact() {
    // The id must be echoed back verbatim, sign bit included.
    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &control_frame(3, frame_type::PING, 0, &[0xde, 0xad, 0xbe, 0xef]),
    )
    .unwrap();
    assert_eq!(
        frames,
        vec![SpdyFrame::Ping {
            id: i32::from_be_bytes([0xde, 0xad, 0xbe, 0xef]),
        }]
    );
}

#[test]
fn window_update_frame() {
    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &[
            0x80, 0x03, 0x00, 0x09, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00,
            0x00, 0x64,
        ],
    )
    .unwrap();
    assert_eq!(
        frames,
        vec![SpdyFrame::WindowUpdate {
            stream_id: 7,
            delta: 100,
        }]
    );
}

#[test]
fn window_update_on_session_stream() {
    // Stream-ID 0 updates the session window; legal, unlike DATA.
    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &control_frame(
            3,
            frame_type::WINDOW_UPDATE,
            0,
            &[0, 0, 0, 0, 0, 1, 0, 0],
        ),
    )
    .unwrap();
    assert_eq!(
        frames,
        vec![SpdyFrame::WindowUpdate {
            stream_id: 0,
            delta: 0x10000,
        }]
    );
}

#[test]
fn rst_stream_frame() {
    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &control_frame(3, frame_type::RST_STREAM, 0, &[0, 0, 0, 5, 0, 0, 0, 3]),
    )
    .unwrap();
    assert_eq!(
        frames,
        vec![SpdyFrame::RstStream {
            stream_id: 5,
            status_code: 3,
        }]
    );
}

#[test]
fn goaway_frame() {
    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &control_frame(3, frame_type::GOAWAY, 0, &[0, 0, 0, 5, 0, 0, 0, 0]),
    )
    .unwrap();
    assert_eq!(
        frames,
        vec![SpdyFrame::GoAway {
            last_good_stream_id: 5,
            status_code: 0,
        }]
    );
}

#[test]
fn goaway_before_any_stream() {
    // last-good-stream-id 0 means no stream was processed.
    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &control_frame(3, frame_type::GOAWAY, 0, &[0, 0, 0, 0, 0, 0, 0, 1]),
    )
    .unwrap();
    assert_eq!(
        frames,
        vec![SpdyFrame::GoAway {
            last_good_stream_id: 0,
            status_code: 1,
        }]
    );
}

// ====== SETTINGS ======

#[test]
fn settings_single_entry() {
    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &[
            0x80, 0x03, 0x00, 0x04, 0x00, 0x00, 0x00, 0x0c, // SETTINGS, length 12
            0x00, 0x00, 0x00, 0x01, // one entry
            0x00, 0x00, 0x00, 0x04, 0x00, 0x01, 0x00, 0x00, // ID 4, value 65536
        ],
    )
    .unwrap();

    match &frames[..] {
        [SpdyFrame::Settings(settings)] => {
            assert!(!settings.clear_previously_persisted());
            assert_eq!(settings.len(), 1);
            let entry = settings.get(settings_id::MAX_CONCURRENT_STREAMS).unwrap();
            assert_eq!(entry.value, 65536);
            assert!(!entry.persist_value);
            assert!(!entry.persisted);
        }
        other => panic!("expected one settings frame, got {other:?}"),
    }
}

#[test]
fn settings_duplicate_id_keeps_first_occurrence() {
    let mut payload = vec![0, 0, 0, 2]; // two entries
    payload.extend_from_slice(&[0, 0, 0, 7, 0, 0, 0, 1]); // ID 7 = 1
    payload.extend_from_slice(&[0, 0, 0, 7, 0, 0, 0, 2]); // ID 7 = 2, ignored

    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &control_frame(3, frame_type::SETTINGS, 0, &payload),
    )
    .unwrap();

    match &frames[..] {
        [SpdyFrame::Settings(settings)] => {
            assert_eq!(settings.len(), 1);
            assert_eq!(settings.get(settings_id::INITIAL_WINDOW_SIZE).unwrap().value, 1);
        }
        other => panic!("expected one settings frame, got {other:?}"),
    }
}

#[test]
fn settings_clear_flag() {
    let payload = [0, 0, 0, 0]; // zero entries
    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &control_frame(3, frame_type::SETTINGS, flags::SETTINGS_CLEAR, &payload),
    )
    .unwrap();

    match &frames[..] {
        [SpdyFrame::Settings(settings)] => {
            assert!(settings.clear_previously_persisted());
            assert!(settings.is_empty());
        }
        other => panic!("expected one settings frame, got {other:?}"),
    }
}

#[test]
fn settings_entry_persistence_flags() {
    let mut payload = vec![0, 0, 0, 2];
    payload.extend_from_slice(&[flags::SETTINGS_PERSIST_VALUE, 0, 0, 1, 0, 0, 0, 10]);
    payload.extend_from_slice(&[flags::SETTINGS_PERSISTED, 0, 0, 2, 0, 0, 0, 20]);

    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &control_frame(3, frame_type::SETTINGS, 0, &payload),
    )
    .unwrap();

    match &frames[..] {
        [SpdyFrame::Settings(settings)] => {
            let first = settings.get(settings_id::UPLOAD_BANDWIDTH).unwrap();
            assert!(first.persist_value);
            assert!(!first.persisted);

            let second = settings.get(settings_id::DOWNLOAD_BANDWIDTH).unwrap();
            assert!(!second.persist_value);
            assert!(second.persisted);
        }
        other => panic!("expected one settings frame, got {other:?}"),
    }
}

#[test]
fn settings_entries_iterate_in_id_order() {
    let mut payload = vec![0, 0, 0, 3];
    payload.extend_from_slice(&[0, 0, 0, 5, 0, 0, 0, 50]);
    payload.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 10]);
    payload.extend_from_slice(&[0, 0, 0, 3, 0, 0, 0, 30]);

    let mut decoder = decoder();
    let frames = decode_all(
        &mut decoder,
        &control_frame(3, frame_type::SETTINGS, 0, &payload),
    )
    .unwrap();

    match &frames[..] {
        [SpdyFrame::Settings(settings)] => {
            let ids: Vec<u32> = settings.iter().map(|(id, _)| id).collect();
            assert_eq!(ids, vec![1, 3, 5]);
        }
        other => panic!("expected one settings frame, got {other:?}"),
    }
}

#[test]
fn settings_entries_arrive_in_fragments() {
    let mut payload = vec![0, 0, 0, 3];
    payload.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 10]);
    payload.extend_from_slice(&[0, 0, 0, 2, 0, 0, 0, 20]);
    payload.extend_from_slice(&[0, 0, 0, 3, 0, 0, 0, 30]);
    let frame = control_frame(3, frame_type::SETTINGS, 0, &payload);

    let mut decoder = decoder();
    let mut buf = BytesMut::new();

    // Header + entry count + half an entry.
    buf.extend_from_slice(&frame[..16]);
    assert!(drain(&mut decoder, &mut buf).unwrap().is_empty());

    // Rest of the first entry plus the second.
    buf.extend_from_slice(&frame[16..28]);
    assert!(drain(&mut decoder, &mut buf).unwrap().is_empty());

    buf.extend_from_slice(&frame[28..]);
    let frames = drain(&mut decoder, &mut buf).unwrap();
    match &frames[..] {
        [SpdyFrame::Settings(settings)] => assert_eq!(settings.len(), 3),
        other => panic!("expected one settings frame, got {other:?}"),
    }
}
