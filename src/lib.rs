//! Deterministic byte representation used for contract arguments, stored
//! account state and inter-contract call payloads.
//!
//! The [`ser`] module holds the codec itself. [`config`] carries the wire-size
//! constants and the decode limits applied by metered hosts, and [`api`] maps
//! codec failures onto the numeric abort codes contracts hand back to the
//! host.

pub mod api;
pub mod config;
pub mod ser;

pub use config::DecodeLimits;
pub use ser::{
    deserialize, serialize, ByteView, Bytes, CodecError, DeserializeError, EncodeError,
    FromBytes, Outcome, Pair, Status, ToBytes,
};
