use super::bytes;
use super::error::{CodecError, CodecResult, EncodeResult};
use super::ints;
use super::outcome::Outcome;
use super::view::ByteView;
use crate::config::DecodeLimits;

/// Writes a sequence using a `u32` element count prefix followed by each
/// element's own encoding.
pub fn write_vec<T, F>(out: &mut Vec<u8>, items: &[T], mut write_item: F) -> EncodeResult<()>
where
    F: FnMut(&mut Vec<u8>, &T) -> EncodeResult<()>,
{
    ints::write_len(out, items.len())?;
    for item in items {
        write_item(out, item)?;
    }
    Ok(())
}

/// Reads a sequence encoded with a `u32` count prefix.
///
/// Each element is decoded from the view remaining after the previous one and
/// the view is advanced by exactly what the element decoder reports. The first
/// failing element aborts the whole decode with that element's error.
pub fn decode_vec<'a, T, F>(view: ByteView<'a>, decode_item: F) -> Outcome<Vec<T>>
where
    F: FnMut(ByteView<'a>) -> Outcome<T>,
{
    decode_vec_bounded(view, &DecodeLimits::UNBOUNDED, decode_item)
}

/// Like [`decode_vec`], rejecting counts above `limits.max_count`.
pub fn decode_vec_bounded<'a, T, F>(
    view: ByteView<'a>,
    limits: &DecodeLimits,
    decode_item: F,
) -> Outcome<Vec<T>>
where
    F: FnMut(ByteView<'a>) -> Outcome<T>,
{
    Outcome::from_result(read_vec(view, limits, decode_item))
}

fn read_vec<'a, T, F>(
    view: ByteView<'a>,
    limits: &DecodeLimits,
    mut decode_item: F,
) -> CodecResult<(Vec<T>, usize)>
where
    F: FnMut(ByteView<'a>) -> Outcome<T>,
{
    let (count, mut position) = read_count(view, limits)?;
    let mut head = view.advance(position)?;
    let mut out = Vec::with_capacity(count.min(head.remaining()));
    for _ in 0..count {
        let (item, consumed) = decode_item(head).into_result()?;
        head = head.advance(consumed)?;
        position += consumed;
        out.push(item);
    }
    Ok((out, position))
}

/// Reads a count prefix and checks it against the limits.
pub(crate) fn read_count(
    view: ByteView<'_>,
    limits: &DecodeLimits,
) -> CodecResult<(usize, usize)> {
    let (count, prefix) = ints::decode_u32(view).into_result()?;
    if !limits.allows_count(count) {
        tracing::debug!(
            count,
            max_count = limits.max_count,
            "declared count exceeds limit"
        );
        return Err(CodecError::FormattingError);
    }
    Ok((count as usize, prefix))
}

/// Writes a list of strings.
pub fn write_string_list<S: AsRef<str>>(out: &mut Vec<u8>, items: &[S]) -> EncodeResult<()> {
    write_vec(out, items, |out, item| bytes::write_string(out, item.as_ref()))
}

/// Reads a list of strings.
pub fn decode_string_list(view: ByteView<'_>) -> Outcome<Vec<String>> {
    decode_vec(view, bytes::decode_string)
}
