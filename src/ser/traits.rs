use core::ops::Deref;

use serde::{Deserialize, Serialize};

use super::bytes;
use super::collections;
use super::error::{CodecResult, DeserializeError, EncodeResult};
use super::ints;
use super::outcome::Outcome;
use super::pairs::Pair;
use super::view::ByteView;
use crate::config::{
    I32_SERIALIZED_LENGTH, LENGTH_PREFIX_SIZE, U32_SERIALIZED_LENGTH, U64_SERIALIZED_LENGTH,
    U8_SERIALIZED_LENGTH,
};

/// Types with a canonical encoding.
pub trait ToBytes {
    /// Appends the encoding of `self` to `out`.
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()>;

    /// Length of the encoding, computed without producing it.
    fn serialized_len(&self) -> usize;

    /// Returns the encoding of `self` as a fresh buffer.
    fn to_bytes(&self) -> EncodeResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.serialized_len());
        self.append_bytes(&mut out)?;
        Ok(out)
    }
}

/// Types that can be decoded from the front of a [`ByteView`].
///
/// Caller-defined composites implement this by chaining the decoders of their
/// fields, which makes them usable as elements of sequences and pair lists.
pub trait FromBytes: Sized {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self>;
}

/// Encodes a value into a fresh buffer.
pub fn serialize<T: ToBytes + ?Sized>(value: &T) -> EncodeResult<Vec<u8>> {
    value.to_bytes()
}

/// Decodes a value that must span the whole buffer.
pub fn deserialize<T: FromBytes>(bytes: &[u8]) -> Result<T, DeserializeError> {
    let (value, consumed) = T::from_bytes(ByteView::new(bytes))
        .into_result()
        .map_err(|error| {
            tracing::trace!(len = bytes.len(), %error, "decode failed");
            DeserializeError::Codec(error)
        })?;
    let remaining = bytes.len().saturating_sub(consumed);
    if remaining != 0 {
        tracing::trace!(consumed, remaining, "trailing bytes after value");
        return Err(DeserializeError::LeftOverBytes {
            consumed,
            remaining,
        });
    }
    Ok(value)
}

/// Raw byte array with the length-prefixed wire layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Bytes(bytes.to_vec())
    }
}

impl ToBytes for u8 {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        ints::write_u8(out, *self);
        Ok(())
    }

    fn serialized_len(&self) -> usize {
        U8_SERIALIZED_LENGTH
    }
}

impl FromBytes for u8 {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self> {
        ints::decode_u8(view)
    }
}

impl ToBytes for u32 {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        ints::write_u32(out, *self);
        Ok(())
    }

    fn serialized_len(&self) -> usize {
        U32_SERIALIZED_LENGTH
    }
}

impl FromBytes for u32 {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self> {
        ints::decode_u32(view)
    }
}

impl ToBytes for i32 {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        ints::write_i32(out, *self);
        Ok(())
    }

    fn serialized_len(&self) -> usize {
        I32_SERIALIZED_LENGTH
    }
}

impl FromBytes for i32 {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self> {
        ints::decode_i32(view)
    }
}

impl ToBytes for u64 {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        ints::write_u64(out, *self);
        Ok(())
    }

    fn serialized_len(&self) -> usize {
        U64_SERIALIZED_LENGTH
    }
}

impl FromBytes for u64 {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self> {
        ints::decode_u64(view)
    }
}

impl ToBytes for bool {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        ints::write_bool(out, *self);
        Ok(())
    }

    fn serialized_len(&self) -> usize {
        U8_SERIALIZED_LENGTH
    }
}

impl FromBytes for bool {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self> {
        ints::decode_bool(view)
    }
}

impl ToBytes for str {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        bytes::write_string(out, self)
    }

    fn serialized_len(&self) -> usize {
        bytes::string_serialized_len(self)
    }
}

impl ToBytes for String {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        self.as_str().append_bytes(out)
    }

    fn serialized_len(&self) -> usize {
        self.as_str().serialized_len()
    }
}

impl FromBytes for String {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self> {
        bytes::decode_string(view)
    }
}

impl ToBytes for Bytes {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        bytes::write_bytes(out, &self.0)
    }

    fn serialized_len(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.0.len()
    }
}

impl FromBytes for Bytes {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self> {
        bytes::decode_bytes(view).map(Bytes)
    }
}

impl<T: ToBytes> ToBytes for [T] {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        collections::write_vec(out, self, |out, item| item.append_bytes(out))
    }

    fn serialized_len(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.iter().map(ToBytes::serialized_len).sum::<usize>()
    }
}

impl<T: ToBytes> ToBytes for Vec<T> {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        self.as_slice().append_bytes(out)
    }

    fn serialized_len(&self) -> usize {
        self.as_slice().serialized_len()
    }
}

impl<T: FromBytes> FromBytes for Vec<T> {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self> {
        collections::decode_vec(view, T::from_bytes)
    }
}

impl<K: ToBytes, V: ToBytes> ToBytes for Pair<K, V> {
    fn append_bytes(&self, out: &mut Vec<u8>) -> EncodeResult<()> {
        self.key.append_bytes(out)?;
        self.value.append_bytes(out)
    }

    fn serialized_len(&self) -> usize {
        self.key.serialized_len() + self.value.serialized_len()
    }
}

impl<K: FromBytes, V: FromBytes> FromBytes for Pair<K, V> {
    fn from_bytes(view: ByteView<'_>) -> Outcome<Self> {
        Outcome::from_result(read_pair(view))
    }
}

fn read_pair<K, V>(view: ByteView<'_>) -> CodecResult<(Pair<K, V>, usize)>
where
    K: FromBytes,
    V: FromBytes,
{
    let (key, key_len) = K::from_bytes(view).into_result()?;
    let (value, value_len) = V::from_bytes(view.advance(key_len)?).into_result()?;
    Ok((Pair::new(key, value), key_len + value_len))
}
