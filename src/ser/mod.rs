//! Canonical byte representation for contract arguments and stored values.
//!
//! All integers are little-endian. Every variable-length component (strings,
//! raw byte arrays, sequences, pair lists) is preceded by a `u32` count and
//! composites are plain concatenations of their parts with no padding.
//!
//! Decoders take a [`ByteView`] by value and return an [`Outcome`] holding the
//! value plus the bytes consumed from that view; callers advance their own
//! view by that amount. Sequence and pair-list decoders are generic over
//! caller-supplied element decoders, so custom composites plug in by providing
//! a function of shape `fn(ByteView<'_>) -> Outcome<T>` or by implementing
//! [`FromBytes`].
//!
//! | Type | Layout |
//! |------|--------|
//! | `u8` | 1 byte |
//! | `u32` / `i32` | 4 bytes |
//! | `u64` | 8 bytes |
//! | string / byte array | `u32` count, then that many bytes |
//! | sequence of `T` | `u32` count, then each `T` encoding |
//! | pair list of `K`, `V` | `u32` count, then each key encoding followed by its value encoding |

mod bytes;
mod collections;
mod error;
mod ints;
mod outcome;
mod pairs;
mod traits;
mod view;

pub use bytes::{
    decode_byte_slice, decode_bytes, decode_bytes_bounded, decode_string, decode_string_bounded,
    string_serialized_len, write_bytes, write_string,
};
pub use collections::{
    decode_string_list, decode_vec, decode_vec_bounded, write_string_list, write_vec,
};
pub use error::{CodecError, CodecResult, DeserializeError, EncodeError, EncodeResult, Status};
pub use ints::{
    decode_bool, decode_i32, decode_u32, decode_u64, decode_u8, ensure_u32, u32_to_bytes,
    u64_to_bytes, write_bool, write_i32, write_len, write_u32, write_u64, write_u8,
};
pub use outcome::Outcome;
pub use pairs::{decode_map, decode_map_bounded, encode_map, encode_pair, write_pairs, Pair};
pub use traits::{deserialize, serialize, Bytes, FromBytes, ToBytes};
pub use view::ByteView;
