use insta::assert_snapshot;
use rpp_bytesrepr::ser::{
    decode_bytes, decode_i32, decode_string, decode_u32, decode_u64, decode_u8, write_bytes,
    write_i32, write_string, write_u32, write_u64, write_u8, ByteView, CodecError, Outcome,
    Status,
};

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn u32_300_layout() {
    let mut buffer = Vec::new();
    write_u32(&mut buffer, 300);
    assert_eq!(buffer, [0x2c, 0x01, 0x00, 0x00]);

    let outcome = decode_u32(ByteView::new(&buffer));
    assert_eq!(outcome, Outcome::decoded(300, 4));

    let truncated = decode_u32(ByteView::new(&buffer[..3]));
    assert_eq!(truncated.error(), Some(CodecError::EarlyEndOfStream));
    assert_eq!(truncated.consumed(), 0);
    assert_eq!(truncated.status(), Status::EarlyEndOfStream);
}

#[test]
fn string_ab_layout() {
    let mut buffer = Vec::new();
    write_string(&mut buffer, "ab").unwrap();
    assert_eq!(buffer, [0x02, 0x00, 0x00, 0x00, 0x61, 0x62]);

    let outcome = decode_string(ByteView::new(&buffer));
    assert_eq!(outcome.consumed(), 6);
    assert_eq!(outcome.into_value(), "ab");
}

#[test]
fn snapshot_mixed_primitives() {
    let mut buffer = Vec::new();
    write_u8(&mut buffer, 7);
    write_i32(&mut buffer, -1);
    write_u64(&mut buffer, 0x0102_0304_0506_0708);
    write_bytes(&mut buffer, &[0xde, 0xad]).unwrap();
    assert_snapshot!(
        hex(&buffer),
        @"07 ff ff ff ff 08 07 06 05 04 03 02 01 02 00 00 00 de ad"
    );
}

#[test]
fn sequential_reads_advance_by_reported_consumption() {
    let mut buffer = Vec::new();
    write_u8(&mut buffer, 0xab);
    write_i32(&mut buffer, i32::MIN);
    write_u64(&mut buffer, u64::MAX);

    let view = ByteView::new(&buffer);
    let first = decode_u8(view);
    assert_eq!(first, Outcome::decoded(0xab, 1));
    let view = view.advance(first.consumed()).unwrap();
    let second = decode_i32(view);
    assert_eq!(second, Outcome::decoded(i32::MIN, 4));
    let view = view.advance(second.consumed()).unwrap();
    let third = decode_u64(view);
    assert_eq!(third, Outcome::decoded(u64::MAX, 8));
    assert!(view.advance(third.consumed()).unwrap().is_empty());
}

#[test]
fn every_primitive_reports_early_end_on_short_input() {
    let short = [0u8; 3];
    let empty = ByteView::new(&[]);
    assert_eq!(decode_u8(empty).error(), Some(CodecError::EarlyEndOfStream));
    assert_eq!(
        decode_i32(ByteView::new(&short)).error(),
        Some(CodecError::EarlyEndOfStream)
    );
    assert_eq!(
        decode_u64(ByteView::new(&[0u8; 7])).error(),
        Some(CodecError::EarlyEndOfStream)
    );
}

#[test]
fn string_leaves_trailing_bytes_untouched() {
    let data = [3u8, 0, 0, 0, b'x', b'y', b'z', 0x2c, 0x01, 0x00, 0x00];
    let view = ByteView::new(&data);
    let text = decode_string(view);
    assert_eq!(text.consumed(), 4 + 3);
    assert_eq!(text.value(), "xyz");

    let rest = view.advance(text.consumed()).unwrap();
    assert_eq!(decode_u32(rest), Outcome::decoded(300, 4));
}

#[test]
fn string_shorter_than_declared_is_early_end() {
    let data = [5u8, 0, 0, 0, b'a', b'b'];
    let outcome = decode_string(ByteView::new(&data));
    assert_eq!(outcome.error(), Some(CodecError::EarlyEndOfStream));
    assert_eq!(outcome.consumed(), 0);

    let outcome = decode_string(ByteView::new(&data[..2]));
    assert_eq!(outcome.error(), Some(CodecError::EarlyEndOfStream));
}

#[test]
fn byte_arrays_follow_the_string_layout() {
    let payload = [0u8, 0x80, 0xff];
    let mut as_bytes = Vec::new();
    write_bytes(&mut as_bytes, &payload).unwrap();

    let outcome = decode_bytes(ByteView::new(&as_bytes));
    assert_eq!(outcome, Outcome::decoded(payload.to_vec(), 7));

    let as_text = decode_string(ByteView::new(&as_bytes)).into_value();
    assert_eq!(as_text.chars().map(|c| c as u32).collect::<Vec<_>>(), [0, 0x80, 0xff]);
}

#[test]
fn empty_string_is_not_absence() {
    let data = [0u8, 0, 0, 0];
    let outcome = decode_string(ByteView::new(&data));
    assert!(outcome.has_value());
    assert_eq!(outcome.consumed(), 4);
    assert_eq!(outcome.value(), "");
}
