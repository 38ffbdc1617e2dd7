use core::fmt;
use serde::{Deserialize, Serialize};

/// Failure classification reported by every decode operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodecError {
    /// The view was shorter than the encoding requires.
    EarlyEndOfStream,
    /// Enough bytes were present but they do not encode a valid value.
    FormattingError,
}

impl CodecError {
    /// Returns the matching [`Status`].
    pub const fn status(self) -> Status {
        match self {
            CodecError::EarlyEndOfStream => Status::EarlyEndOfStream,
            CodecError::FormattingError => Status::FormattingError,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::EarlyEndOfStream => write!(f, "early end of stream"),
            CodecError::FormattingError => write!(f, "formatting error"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Status of the last decode step, including success.
///
/// The discriminants are part of the wire contract with hosts that log raw
/// status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Status {
    /// Last operation was a success.
    Ok = 0,
    /// Early end of stream.
    EarlyEndOfStream = 1,
    /// Unexpected data encountered while decoding.
    FormattingError = 2,
}

impl Status {
    /// Returns the stable numeric code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parses a numeric status code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Status::Ok),
            1 => Some(Status::EarlyEndOfStream),
            2 => Some(Status::FormattingError),
            _ => None,
        }
    }
}

/// Failure raised while producing an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodeError {
    /// A sequence or string is too long for its `u32` count prefix.
    LengthOverflow {
        /// Number of elements that had to be prefixed.
        len: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::LengthOverflow { len } => {
                write!(f, "length {len} does not fit a u32 count prefix")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Failure raised by the whole-buffer [`deserialize`](super::deserialize) helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeserializeError {
    /// The value itself failed to decode.
    Codec(CodecError),
    /// The value decoded but bytes remained afterwards.
    LeftOverBytes {
        /// Bytes consumed by the value.
        consumed: usize,
        /// Bytes left unread.
        remaining: usize,
    },
}

impl From<CodecError> for DeserializeError {
    fn from(error: CodecError) -> Self {
        DeserializeError::Codec(error)
    }
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeserializeError::Codec(error) => error.fmt(f),
            DeserializeError::LeftOverBytes {
                consumed,
                remaining,
            } => write!(
                f,
                "{remaining} bytes left over after consuming {consumed} bytes"
            ),
        }
    }
}

impl std::error::Error for DeserializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeserializeError::Codec(error) => Some(error),
            DeserializeError::LeftOverBytes { .. } => None,
        }
    }
}

/// Convenient alias for internal decode steps.
pub type CodecResult<T> = core::result::Result<T, CodecError>;

/// Convenient alias for encode results.
pub type EncodeResult<T> = core::result::Result<T, EncodeError>;
