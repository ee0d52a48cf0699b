//! Record encoding and slice decoding.

use crate::error::{DecodeError, EncodeError, LimitKind, WireResult};
use crate::limits::Limits;
use crate::record::{Record, RecordTag, FIELD_COUNT, TAG_SIZE};

/// Returns the total encoded size of a record sequence.
#[must_use]
pub fn encoded_len(records: &[Record]) -> usize {
    records.iter().map(Record::encoded_len).sum()
}

/// Encodes a single record into the provided output buffer.
///
/// Returns the number of bytes written.
pub fn encode_record(record: &Record, out: &mut [u8]) -> Result<usize, EncodeError> {
    let needed = record.encoded_len();
    if out.len() < needed {
        return Err(EncodeError::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }

    out[0] = record.tag().raw();
    match record {
        Record::Timestamp { timestamp } => {
            out[1..5].copy_from_slice(&timestamp.to_le_bytes());
        }
        Record::Sample { fields } => {
            for (idx, value) in fields.iter().enumerate() {
                let start = TAG_SIZE + idx * 4;
                out[start..start + 4].copy_from_slice(&value.to_le_bytes());
            }
        }
    }

    Ok(needed)
}

/// Encodes a record sequence back to back, with no framing.
#[must_use]
pub fn encode_records(records: &[Record]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(records));
    for record in records {
        append_record(record, &mut buf);
    }
    buf
}

/// Appends one encoded record to a growable buffer.
pub fn append_record(record: &Record, buf: &mut Vec<u8>) {
    buf.push(record.tag().raw());
    match record {
        Record::Timestamp { timestamp } => buf.extend_from_slice(&timestamp.to_le_bytes()),
        Record::Sample { fields } => {
            for value in fields {
                buf.extend_from_slice(&value.to_le_bytes());
            }
        }
    }
}

/// Decodes the record starting at the beginning of `buf`.
///
/// Returns the record and the number of bytes consumed.
pub fn decode_record(buf: &[u8]) -> WireResult<(Record, usize)> {
    decode_record_at(buf, 0)
}

fn decode_record_at(buf: &[u8], offset: usize) -> WireResult<(Record, usize)> {
    let Some(&tag) = buf.get(offset) else {
        return Err(DecodeError::Truncated {
            offset,
            needed: TAG_SIZE,
            available: 0,
        });
    };
    let tag = RecordTag::parse(tag, offset)?;
    let size = tag.record_size();
    let available = buf.len() - offset;
    if available < size {
        return Err(DecodeError::Truncated {
            offset,
            needed: size,
            available,
        });
    }

    let body = &buf[offset + TAG_SIZE..offset + size];
    Ok((decode_body(tag, body), size))
}

/// Builds a record from a body of exactly `tag.record_size() - TAG_SIZE` bytes.
pub(crate) fn decode_body(tag: RecordTag, body: &[u8]) -> Record {
    match tag {
        RecordTag::Timestamp => Record::Timestamp {
            timestamp: read_u32(body, 0),
        },
        RecordTag::Sample => {
            let mut fields = [0u32; FIELD_COUNT];
            for (idx, field) in fields.iter_mut().enumerate() {
                *field = read_u32(body, idx * 4);
            }
            Record::Sample { fields }
        }
    }
}

fn read_u32(body: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([body[at], body[at + 1], body[at + 2], body[at + 3]])
}

/// Decodes a whole record file.
///
/// The input must consist of complete records only; trailing partial data is
/// reported as [`DecodeError::Truncated`].
pub fn decode_records(buf: &[u8], limits: &Limits) -> WireResult<Vec<Record>> {
    if buf.len() > limits.max_file_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::FileBytes,
            limit: limits.max_file_bytes,
            actual: buf.len(),
        });
    }

    let mut offset = 0usize;
    let mut records = Vec::new();
    while offset < buf.len() {
        if records.len() >= limits.max_records {
            return Err(DecodeError::LimitsExceeded {
                kind: LimitKind::RecordCount,
                limit: limits.max_records,
                actual: records.len() + 1,
            });
        }
        let (record, used) = decode_record_at(buf, offset)?;
        records.push(record);
        offset += used;
    }

    Ok(records)
}
