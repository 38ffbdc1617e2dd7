use super::error::{CodecError, CodecResult, EncodeResult};
use super::ints;
use super::outcome::Outcome;
use super::view::ByteView;
use crate::config::{DecodeLimits, LENGTH_PREFIX_SIZE};

/// Writes a `u32` length prefix followed by the raw bytes.
pub fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) -> EncodeResult<()> {
    ints::write_len(out, bytes.len())?;
    out.extend_from_slice(bytes);
    Ok(())
}

/// Writes a string as a `u32` character count followed by one byte per
/// character.
///
/// Characters above `U+00FF` are truncated to their low byte.
pub fn write_string(out: &mut Vec<u8>, value: &str) -> EncodeResult<()> {
    ints::write_len(out, value.chars().count())?;
    out.extend(value.chars().map(|ch| (u32::from(ch) & 0xff) as u8));
    Ok(())
}

/// Encoded length of a string without materialising it.
pub fn string_serialized_len(value: &str) -> usize {
    LENGTH_PREFIX_SIZE + value.chars().count()
}

/// Reads a length-prefixed payload and borrows it from the view.
pub fn decode_byte_slice<'a>(view: ByteView<'a>) -> Outcome<&'a [u8]> {
    Outcome::from_result(read_prefixed(view, &DecodeLimits::UNBOUNDED))
}

/// Reads a length-prefixed payload into an owned vector.
pub fn decode_bytes(view: ByteView<'_>) -> Outcome<Vec<u8>> {
    decode_bytes_bounded(view, &DecodeLimits::UNBOUNDED)
}

/// Like [`decode_bytes`], rejecting lengths above `limits.max_len`.
pub fn decode_bytes_bounded(view: ByteView<'_>, limits: &DecodeLimits) -> Outcome<Vec<u8>> {
    Outcome::from_result(read_prefixed(view, limits)).map(<[u8]>::to_vec)
}

/// Reads a length-prefixed string, one character per byte.
pub fn decode_string(view: ByteView<'_>) -> Outcome<String> {
    decode_string_bounded(view, &DecodeLimits::UNBOUNDED)
}

/// Like [`decode_string`], rejecting lengths above `limits.max_len`.
pub fn decode_string_bounded(view: ByteView<'_>, limits: &DecodeLimits) -> Outcome<String> {
    Outcome::from_result(read_prefixed(view, limits))
        .map(|payload| payload.iter().copied().map(char::from).collect())
}

fn read_prefixed<'a>(
    view: ByteView<'a>,
    limits: &DecodeLimits,
) -> CodecResult<(&'a [u8], usize)> {
    let (len, prefix) = ints::decode_u32(view).into_result()?;
    if !limits.allows_len(len) {
        tracing::debug!(len, max_len = limits.max_len, "declared length exceeds limit");
        return Err(CodecError::FormattingError);
    }
    let len = len as usize;
    let payload = view.advance(prefix)?.peek(len)?;
    Ok((payload, prefix + len))
}
