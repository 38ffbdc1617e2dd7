use super::collections::read_count;
use super::error::{CodecResult, EncodeResult};
use super::ints;
use super::outcome::Outcome;
use super::view::ByteView;
use crate::config::{DecodeLimits, LENGTH_PREFIX_SIZE};
use serde::{Deserialize, Serialize};

/// Key/value entry of a pair list.
///
/// Pair lists keep insertion order and allow duplicate keys; callers that need
/// map semantics impose them on top.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Pair::new(key, value)
    }
}

/// Concatenates an encoded key with its encoded value.
pub fn encode_pair(key: &[u8], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(key.len() + value.len());
    out.extend_from_slice(key);
    out.extend_from_slice(value);
    out
}

/// Prefixes already-encoded pairs with their count.
pub fn encode_map<P: AsRef<[u8]>>(pairs: &[P]) -> EncodeResult<Vec<u8>> {
    let body: usize = pairs.iter().map(|pair| pair.as_ref().len()).sum();
    let mut out = Vec::with_capacity(LENGTH_PREFIX_SIZE + body);
    ints::write_len(&mut out, pairs.len())?;
    for pair in pairs {
        out.extend_from_slice(pair.as_ref());
    }
    Ok(out)
}

/// Writes a pair list: `u32` count, then key and value encodings per entry.
pub fn write_pairs<K, V, FK, FV>(
    out: &mut Vec<u8>,
    pairs: &[Pair<K, V>],
    mut write_key: FK,
    mut write_value: FV,
) -> EncodeResult<()>
where
    FK: FnMut(&mut Vec<u8>, &K) -> EncodeResult<()>,
    FV: FnMut(&mut Vec<u8>, &V) -> EncodeResult<()>,
{
    ints::write_len(out, pairs.len())?;
    for pair in pairs {
        write_key(out, &pair.key)?;
        write_value(out, &pair.value)?;
    }
    Ok(())
}

/// Reads a pair list with independent key and value decoders.
///
/// Per slot the key is decoded first and the value from the bytes right after
/// it. A failure in either half aborts the decode with that error.
pub fn decode_map<'a, K, V, FK, FV>(
    view: ByteView<'a>,
    decode_key: FK,
    decode_value: FV,
) -> Outcome<Vec<Pair<K, V>>>
where
    FK: FnMut(ByteView<'a>) -> Outcome<K>,
    FV: FnMut(ByteView<'a>) -> Outcome<V>,
{
    decode_map_bounded(view, &DecodeLimits::UNBOUNDED, decode_key, decode_value)
}

/// Like [`decode_map`], rejecting counts above `limits.max_count`.
pub fn decode_map_bounded<'a, K, V, FK, FV>(
    view: ByteView<'a>,
    limits: &DecodeLimits,
    decode_key: FK,
    decode_value: FV,
) -> Outcome<Vec<Pair<K, V>>>
where
    FK: FnMut(ByteView<'a>) -> Outcome<K>,
    FV: FnMut(ByteView<'a>) -> Outcome<V>,
{
    Outcome::from_result(read_pairs(view, limits, decode_key, decode_value))
}

fn read_pairs<'a, K, V, FK, FV>(
    view: ByteView<'a>,
    limits: &DecodeLimits,
    mut decode_key: FK,
    mut decode_value: FV,
) -> CodecResult<(Vec<Pair<K, V>>, usize)>
where
    FK: FnMut(ByteView<'a>) -> Outcome<K>,
    FV: FnMut(ByteView<'a>) -> Outcome<V>,
{
    let (count, mut position) = read_count(view, limits)?;
    let mut head = view.advance(position)?;
    let mut out = Vec::with_capacity(count.min(head.remaining()));
    for _ in 0..count {
        let (key, key_len) = decode_key(head).into_result()?;
        head = head.advance(key_len)?;
        let (value, value_len) = decode_value(head).into_result()?;
        head = head.advance(value_len)?;
        position += key_len + value_len;
        out.push(Pair::new(key, value));
    }
    Ok((out, position))
}
