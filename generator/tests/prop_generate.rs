use generator::{build_records, GeneratorConfig, RngSource, TimestampClock};
use proptest::prelude::*;
use wire::{decode_records, encode_records, Limits, Record, FIELD_COUNT};

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (1usize..64, 0u32..2048, 0u32..16).prop_flat_map(|(record_count, value_max, step_max)| {
        let offset_max = u32::try_from(record_count - 1).unwrap().min(8);
        (0..=offset_max).prop_map(move |rt_offset_max| GeneratorConfig {
            record_count,
            sample_value_max: value_max,
            rt_offset_max,
            timestamp_step_max: step_max,
            file_count: 1,
        })
    })
}

proptest! {
    #[test]
    fn prop_file_invariants_hold(
        config in config_strategy(),
        seed in any::<u64>(),
        start in 0u32..1_000_000,
    ) {
        let clock = TimestampClock::from_raw(start);
        let built = build_records(&config, clock, &mut RngSource::seeded(seed)).unwrap();

        let bytes = encode_records(&built.records);
        prop_assert_eq!(bytes.len(), config.file_size());

        let records = decode_records(&bytes, &Limits::unlimited()).unwrap();
        prop_assert_eq!(records.len(), config.record_count);
        prop_assert!(built.rt_offset <= config.rt_offset_max as usize);

        let step = built.clock.raw() - start;
        prop_assert!(step <= config.timestamp_step_max);

        let mut previous = [0u32; FIELD_COUNT];
        for (position, record) in records.iter().enumerate() {
            match record {
                Record::Timestamp { timestamp } => {
                    prop_assert_eq!(position, built.rt_offset);
                    prop_assert_eq!(*timestamp, built.clock.raw());
                }
                Record::Sample { fields } => {
                    prop_assert!(position != built.rt_offset);
                    for (value, prev) in fields.iter().zip(previous.iter_mut()) {
                        prop_assert!(*value <= config.sample_value_max);
                        prop_assert!(*value >= *prev);
                        *prev = *value;
                    }
                }
            }
        }
    }
}
