use proptest::prelude::*;
use rpp_bytesrepr::ser::{
    decode_i32, decode_map, decode_string, decode_u32, decode_u64, decode_u8, decode_vec,
    write_i32, write_u64, ByteView, Bytes, CodecError, FromBytes, Pair, ToBytes,
};

fn latin1_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..48)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect::<String>())
}

proptest! {
    #[test]
    fn u8_roundtrip(value in any::<u8>()) {
        let bytes = value.to_bytes().unwrap();
        let outcome = decode_u8(ByteView::new(&bytes));
        prop_assert_eq!(outcome.consumed(), 1);
        prop_assert_eq!(outcome.into_value(), value);
    }

    #[test]
    fn u32_roundtrip(value in any::<u32>()) {
        let bytes = value.to_bytes().unwrap();
        prop_assert_eq!(bytes.as_slice(), &value.to_le_bytes()[..]);
        let outcome = decode_u32(ByteView::new(&bytes));
        prop_assert_eq!(outcome.consumed(), 4);
        prop_assert_eq!(outcome.into_value(), value);
    }

    #[test]
    fn i32_roundtrip(value in any::<i32>()) {
        let mut bytes = Vec::new();
        write_i32(&mut bytes, value);
        let outcome = decode_i32(ByteView::new(&bytes));
        prop_assert_eq!(outcome.consumed(), 4);
        prop_assert_eq!(outcome.into_value(), value);
    }

    #[test]
    fn u64_roundtrip(value in any::<u64>()) {
        let mut bytes = Vec::new();
        write_u64(&mut bytes, value);
        let outcome = decode_u64(ByteView::new(&bytes));
        prop_assert_eq!(outcome.consumed(), 8);
        prop_assert_eq!(outcome.into_value(), value);
    }

    #[test]
    fn latin1_string_roundtrip(
        text in latin1_string(),
        tail in prop::collection::vec(any::<u8>(), 0..8)
    ) {
        let mut bytes = text.to_bytes().unwrap();
        let encoded_len = bytes.len();
        bytes.extend_from_slice(&tail);
        let outcome = decode_string(ByteView::new(&bytes));
        prop_assert_eq!(outcome.consumed(), encoded_len);
        prop_assert_eq!(outcome.into_value(), text);
    }

    #[test]
    fn sequence_roundtrip(values in prop::collection::vec(any::<u64>(), 0..32)) {
        let bytes = values.to_bytes().unwrap();
        let outcome = decode_vec(ByteView::new(&bytes), decode_u64);
        prop_assert_eq!(outcome.consumed(), bytes.len());
        prop_assert_eq!(outcome.into_value(), values);
    }

    #[test]
    fn nested_byte_arrays_roundtrip(
        values in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 0..8)
    ) {
        let values: Vec<Bytes> = values.into_iter().map(Bytes::from).collect();
        let bytes = values.to_bytes().unwrap();
        prop_assert_eq!(bytes.len(), values.serialized_len());
        let outcome = Vec::<Bytes>::from_bytes(ByteView::new(&bytes));
        prop_assert_eq!(outcome.into_value(), values);
    }

    #[test]
    fn pair_list_roundtrip(
        pairs in prop::collection::vec((latin1_string(), any::<u32>()), 0..16)
    ) {
        let pairs: Vec<Pair<String, u32>> = pairs.into_iter().map(Pair::from).collect();
        let bytes = pairs.to_bytes().unwrap();
        let outcome = decode_map(ByteView::new(&bytes), decode_string, decode_u32);
        prop_assert_eq!(outcome.consumed(), bytes.len());
        prop_assert_eq!(outcome.into_value(), pairs);
    }

    #[test]
    fn every_strict_prefix_is_early_end(values in prop::collection::vec(latin1_string(), 0..6)) {
        let bytes = values.to_bytes().unwrap();
        for cut in 0..bytes.len() {
            let outcome = Vec::<String>::from_bytes(ByteView::new(&bytes[..cut]));
            prop_assert_eq!(outcome.error(), Some(CodecError::EarlyEndOfStream));
            prop_assert_eq!(outcome.consumed(), 0);
        }
    }
}
