//! Inspection and decoding tools for sdat record files.
//!
//! - Summarize a record file: record counts, timestamp placement, column ranges
//! - Decode every record into structured JSON or a human-readable listing

use serde::Serialize;
use wire::{decode_records, Limits, Record, WireResult, FIELD_COUNT};

/// Summary of one decoded record file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub byte_len: usize,
    pub record_count: usize,
    pub sample_count: usize,
    pub timestamps: Vec<TimestampEntry>,
    pub columns: Vec<ColumnSummary>,
}

/// Where a timestamp record sits and what it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimestampEntry {
    pub position: usize,
    pub byte_offset: usize,
    pub timestamp: u32,
}

/// Range and ordering of one sample field across the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub index: usize,
    pub min: Option<u32>,
    pub max: Option<u32>,
    /// Values are non-decreasing by record position.
    pub sorted: bool,
}

/// Builds an [`InspectReport`] from raw file bytes.
pub fn inspect_file(bytes: &[u8], limits: &Limits) -> WireResult<InspectReport> {
    let records = decode_records(bytes, limits)?;

    let mut timestamps = Vec::new();
    let mut columns: Vec<ColumnSummary> = (0..FIELD_COUNT)
        .map(|index| ColumnSummary {
            index,
            min: None,
            max: None,
            sorted: true,
        })
        .collect();
    let mut byte_offset = 0usize;
    let mut sample_count = 0usize;

    for (position, record) in records.iter().enumerate() {
        match record {
            Record::Timestamp { timestamp } => timestamps.push(TimestampEntry {
                position,
                byte_offset,
                timestamp: *timestamp,
            }),
            Record::Sample { fields } => {
                sample_count += 1;
                for (column, &value) in columns.iter_mut().zip(fields) {
                    if column.max.is_some_and(|last_max| value < last_max) {
                        column.sorted = false;
                    }
                    column.min = Some(column.min.map_or(value, |min| min.min(value)));
                    column.max = Some(column.max.map_or(value, |max| max.max(value)));
                }
            }
        }
        byte_offset += record.encoded_len();
    }

    Ok(InspectReport {
        byte_len: bytes.len(),
        record_count: records.len(),
        sample_count,
        timestamps,
        columns,
    })
}

/// Every record of a file, tagged with its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedFile {
    pub records: Vec<DecodedRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodedRecord {
    Timestamp {
        position: usize,
        timestamp: u32,
    },
    Sample {
        position: usize,
        fields: [u32; FIELD_COUNT],
    },
}

/// Decodes a record file into a serializable listing.
pub fn decode_file_json(bytes: &[u8], limits: &Limits) -> WireResult<DecodedFile> {
    let records = decode_records(bytes, limits)?
        .into_iter()
        .enumerate()
        .map(|(position, record)| match record {
            Record::Timestamp { timestamp } => DecodedRecord::Timestamp {
                position,
                timestamp,
            },
            Record::Sample { fields } => DecodedRecord::Sample { position, fields },
        })
        .collect();
    Ok(DecodedFile { records })
}

/// Renders a decoded file one record per line.
#[must_use]
pub fn format_decode_pretty(decoded: &DecodedFile) -> String {
    let mut out = String::new();
    for record in &decoded.records {
        let line = match record {
            DecodedRecord::Timestamp {
                position,
                timestamp,
            } => format!("{position:>5}  RT  {timestamp}"),
            DecodedRecord::Sample { position, fields } => {
                let values: Vec<String> = fields.iter().map(u32::to_string).collect();
                format!("{position:>5}  PV  {}", values.join(" "))
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire::encode_records;

    fn fixture() -> Vec<u8> {
        encode_records(&[
            Record::sample([1, 2, 3, 4, 5, 6]),
            Record::timestamp(42),
            Record::sample([2, 2, 9, 4, 5, 7]),
            Record::sample([3, 5, 9, 8, 1, 7]),
        ])
    }

    #[test]
    fn inspect_counts_and_timestamp() {
        let report = inspect_file(&fixture(), &Limits::for_testing()).unwrap();
        assert_eq!(report.byte_len, 3 * 25 + 5);
        assert_eq!(report.record_count, 4);
        assert_eq!(report.sample_count, 3);
        assert_eq!(
            report.timestamps,
            vec![TimestampEntry {
                position: 1,
                byte_offset: 25,
                timestamp: 42,
            }]
        );
    }

    #[test]
    fn inspect_column_ranges_and_order() {
        let report = inspect_file(&fixture(), &Limits::for_testing()).unwrap();
        assert_eq!(report.columns.len(), FIELD_COUNT);
        assert_eq!(report.columns[0].min, Some(1));
        assert_eq!(report.columns[0].max, Some(3));
        assert!(report.columns[0].sorted);
        assert!(report.columns[1].sorted);
        assert!(!report.columns[4].sorted);
        assert_eq!(report.columns[4].min, Some(1));
    }

    #[test]
    fn inspect_empty_file() {
        let report = inspect_file(&[], &Limits::for_testing()).unwrap();
        assert_eq!(report.record_count, 0);
        assert!(report.timestamps.is_empty());
        assert!(report.columns.iter().all(|column| column.min.is_none()));
    }

    #[test]
    fn inspect_propagates_decode_errors() {
        let mut bytes = fixture();
        bytes.push(9);
        assert!(inspect_file(&bytes, &Limits::for_testing()).is_err());
    }

    #[test]
    fn decode_json_tags_records() {
        let decoded = decode_file_json(&fixture(), &Limits::for_testing()).unwrap();
        let json = serde_json::to_value(&decoded).unwrap();
        let records = json["records"].as_array().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[1]["kind"], "timestamp");
        assert_eq!(records[1]["timestamp"], 42);
        assert_eq!(records[0]["kind"], "sample");
        assert_eq!(records[0]["fields"][5], 6);
    }

    #[test]
    fn pretty_output_one_line_per_record() {
        let decoded = decode_file_json(&fixture(), &Limits::for_testing()).unwrap();
        let text = format_decode_pretty(&decoded);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("RT  42"));
        assert!(lines[0].ends_with("1 2 3 4 5 6"));
    }
}
