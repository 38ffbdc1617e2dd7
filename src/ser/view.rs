use super::error::{CodecError, CodecResult};

/// Read-only window over a byte slice with a running read offset.
///
/// Views are `Copy`: narrowing produces a new view over the same storage and
/// never copies bytes. Every narrowing is bounds-checked, so the remaining
/// length stays within `0..=bytes.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteView<'a> {
    /// Creates a new view positioned at the start of the provided slice.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Returns the current offset within the underlying slice.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes remaining past the current offset.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Returns `true` when no bytes remain.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the unread bytes.
    pub fn as_slice(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    /// Returns a view advanced by `len` bytes.
    pub fn advance(&self, len: usize) -> CodecResult<ByteView<'a>> {
        if len > self.remaining() {
            return Err(CodecError::EarlyEndOfStream);
        }
        Ok(ByteView {
            bytes: self.bytes,
            offset: self.offset + len,
        })
    }

    /// Borrows the next `len` bytes without advancing.
    pub fn peek(&self, len: usize) -> CodecResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(CodecError::EarlyEndOfStream);
        }
        Ok(&self.bytes[self.offset..self.offset + len])
    }

    /// Reads a fixed-size array from the front of the view.
    pub fn peek_array<const N: usize>(&self) -> CodecResult<[u8; N]> {
        let bytes = self.peek(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteView::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_bounds_checked() {
        let data = [1u8, 2, 3];
        let view = ByteView::new(&data);
        let tail = view.advance(2).unwrap();
        assert_eq!(tail.position(), 2);
        assert_eq!(tail.as_slice(), &[3]);
        assert_eq!(view.remaining(), 3);
        assert_eq!(tail.advance(2), Err(CodecError::EarlyEndOfStream));
        assert!(tail.advance(1).unwrap().is_empty());
    }

    #[test]
    fn peek_does_not_move_the_offset() {
        let data = [9u8, 8, 7, 6];
        let view = ByteView::new(&data);
        assert_eq!(view.peek_array::<2>().unwrap(), [9, 8]);
        assert_eq!(view.position(), 0);
        assert_eq!(view.peek(5), Err(CodecError::EarlyEndOfStream));
    }
}
