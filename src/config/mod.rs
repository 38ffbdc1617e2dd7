//! Wire-size constants and decode resource limits.
//!
//! The constants below are part of the canonical layout and must never change
//! without bumping the format. [`DecodeLimits`] lets hosts that meter
//! execution reject implausible count prefixes before any allocation happens.

use serde::{Deserialize, Serialize};

/// Encoded width of a `u8`.
pub const U8_SERIALIZED_LENGTH: usize = 1;

/// Encoded width of a `u32`.
pub const U32_SERIALIZED_LENGTH: usize = 4;

/// Encoded width of an `i32`.
pub const I32_SERIALIZED_LENGTH: usize = 4;

/// Encoded width of a `u64`.
pub const U64_SERIALIZED_LENGTH: usize = 8;

/// Width of the count prefix preceding every variable-length encoding.
pub const LENGTH_PREFIX_SIZE: usize = U32_SERIALIZED_LENGTH;

/// Upper bounds applied to declared counts and lengths while decoding.
///
/// A count or length above its bound is reported as
/// [`CodecError::FormattingError`](crate::ser::CodecError::FormattingError),
/// regardless of how many bytes remain in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeLimits {
    /// Maximum element count of a sequence or pair list.
    pub max_count: u32,
    /// Maximum length of a string or raw byte array.
    pub max_len: u32,
}

impl DecodeLimits {
    /// Accepts every count representable by the prefix.
    pub const UNBOUNDED: DecodeLimits = DecodeLimits {
        max_count: u32::MAX,
        max_len: u32::MAX,
    };

    /// Profile for decoding inside a resource-metered host.
    pub const METERED: DecodeLimits = DecodeLimits {
        max_count: 1 << 16,
        max_len: 1 << 20,
    };

    /// Creates a custom limit set.
    pub const fn new(max_count: u32, max_len: u32) -> Self {
        Self { max_count, max_len }
    }

    /// Returns `true` if a declared element count is acceptable.
    pub const fn allows_count(&self, count: u32) -> bool {
        count <= self.max_count
    }

    /// Returns `true` if a declared string/byte length is acceptable.
    pub const fn allows_len(&self, len: u32) -> bool {
        len <= self.max_len
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        DecodeLimits::UNBOUNDED
    }
}
