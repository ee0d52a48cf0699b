use proptest::prelude::*;
use wire::{decode_records, encode_records, Limits, Record, StreamDecoder, FIELD_COUNT};

fn record_strategy() -> impl Strategy<Value = Record> {
    prop_oneof![
        any::<u32>().prop_map(Record::timestamp),
        any::<[u32; FIELD_COUNT]>().prop_map(Record::sample),
    ]
}

proptest! {
    #[test]
    fn prop_stream_matches_slice_decode(records in prop::collection::vec(record_strategy(), 0..128)) {
        let bytes = encode_records(&records);

        let sliced = decode_records(&bytes, &Limits::default()).unwrap();
        prop_assert_eq!(&sliced, &records);

        let mut decoder = StreamDecoder::new();
        let streamed = decoder.push_slice(&bytes).unwrap();
        prop_assert_eq!(&streamed, &records);
        prop_assert!(decoder.is_idle());
    }

    #[test]
    fn prop_truncated_input_never_decodes(
        records in prop::collection::vec(record_strategy(), 1..32),
        cut in 1usize..25,
    ) {
        let bytes = encode_records(&records);
        let last = records.last().unwrap().encoded_len();
        let cut = cut.min(last - 1).max(1);
        let truncated = &bytes[..bytes.len() - cut];
        prop_assert!(decode_records(truncated, &Limits::default()).is_err());

        let mut decoder = StreamDecoder::new();
        let streamed = decoder.push_slice(truncated).unwrap();
        prop_assert_eq!(streamed.len(), records.len() - 1);
        prop_assert!(!decoder.is_idle());
    }
}
