use super::error::{EncodeError, EncodeResult};
use super::outcome::Outcome;
use super::view::ByteView;
use crate::config::{
    I32_SERIALIZED_LENGTH, U32_SERIALIZED_LENGTH, U64_SERIALIZED_LENGTH, U8_SERIALIZED_LENGTH,
};

/// Encodes a `u8` into the output buffer.
pub fn write_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

/// Encodes a `u32` in little-endian order.
pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&u32_to_le(value));
}

/// Encodes an `i32` in little-endian two's complement.
pub fn write_i32(out: &mut Vec<u8>, value: i32) {
    write_u32(out, value as u32);
}

/// Encodes a `u64` in little-endian order.
pub fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&u64_to_le(value));
}

/// Writes a boolean flag as a single byte (`0` or `1`).
pub fn write_bool(out: &mut Vec<u8>, value: bool) {
    write_u8(out, value as u8);
}

/// Converts a `usize` into a `u32` count prefix.
pub fn ensure_u32(len: usize) -> EncodeResult<u32> {
    u32::try_from(len).map_err(|_| EncodeError::LengthOverflow { len })
}

/// Writes a `u32` count prefix for a collection of `len` elements.
pub fn write_len(out: &mut Vec<u8>, len: usize) -> EncodeResult<()> {
    write_u32(out, ensure_u32(len)?);
    Ok(())
}

/// Reads a `u8`.
pub fn decode_u8(view: ByteView<'_>) -> Outcome<u8> {
    match view.peek_array::<1>() {
        Ok(bytes) => Outcome::decoded(bytes[0], U8_SERIALIZED_LENGTH),
        Err(error) => Outcome::failed(error),
    }
}

/// Reads a little-endian `u32`.
pub fn decode_u32(view: ByteView<'_>) -> Outcome<u32> {
    match view.peek_array::<4>() {
        Ok(bytes) => Outcome::decoded(u32_from_le(bytes), U32_SERIALIZED_LENGTH),
        Err(error) => Outcome::failed(error),
    }
}

/// Reads a little-endian two's complement `i32`.
pub fn decode_i32(view: ByteView<'_>) -> Outcome<i32> {
    match view.peek_array::<4>() {
        Ok(bytes) => Outcome::decoded(u32_from_le(bytes) as i32, I32_SERIALIZED_LENGTH),
        Err(error) => Outcome::failed(error),
    }
}

/// Reads a little-endian `u64`.
pub fn decode_u64(view: ByteView<'_>) -> Outcome<u64> {
    match view.peek_array::<8>() {
        Ok(bytes) => Outcome::decoded(u64_from_le(bytes), U64_SERIALIZED_LENGTH),
        Err(error) => Outcome::failed(error),
    }
}

/// Reads a boolean flag encoded as `0` or `1`; any other byte is malformed.
pub fn decode_bool(view: ByteView<'_>) -> Outcome<bool> {
    decode_u8(view).and_then_validate(|byte| match byte {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    })
}

/// Convenience wrapper returning the four bytes of a `u32`.
pub fn u32_to_bytes(value: u32) -> [u8; 4] {
    u32_to_le(value)
}

/// Convenience wrapper returning the eight bytes of a `u64`.
pub fn u64_to_bytes(value: u64) -> [u8; 8] {
    u64_to_le(value)
}

// Explicit shift-and-mask so the layout never depends on host endianness.

fn u32_to_le(value: u32) -> [u8; 4] {
    [
        (value & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        ((value >> 16) & 0xff) as u8,
        ((value >> 24) & 0xff) as u8,
    ]
}

fn u32_from_le(bytes: [u8; 4]) -> u32 {
    bytes
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, byte)| acc | (u32::from(*byte) << (8 * i)))
}

fn u64_to_le(value: u64) -> [u8; 8] {
    let mut out = [0u8; 8];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = ((value >> (8 * i)) & 0xff) as u8;
    }
    out
}

fn u64_from_le(bytes: [u8; 8]) -> u64 {
    bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, byte)| acc | (u64::from(*byte) << (8 * i)))
}
