//! Binary record layout for sdat data files.
//!
//! A data file is a flat sequence of records with no header, footer or
//! length prefix. Every record starts with a one-byte tag that selects its
//! size:
//!
//! ```text
//! TimestampRecord ::= tag:u8(=0) timestamp:u32
//! SampleRecord    ::= tag:u8(=1) f0:u32 f1:u32 f2:u32 f3:u32 f4:u32 f5:u32
//! ```
//!
//! All integers are little-endian and there is no padding, so a decoder must
//! read the tag before it knows how many bytes follow.
//!
//! # Example
//!
//! ```
//! use wire::{decode_records, encode_records, Limits, Record};
//!
//! let records = [Record::timestamp(12), Record::sample([0, 1, 2, 3, 4, 5])];
//! let bytes = encode_records(&records);
//! assert_eq!(bytes.len(), 5 + 25);
//!
//! let decoded = decode_records(&bytes, &Limits::default()).unwrap();
//! assert_eq!(decoded, records);
//! ```

mod codec;
mod error;
mod limits;
mod record;
mod stream;

pub use codec::{
    append_record, decode_record, decode_records, encode_record, encode_records, encoded_len,
};
pub use error::{DecodeError, EncodeError, LimitKind, WireResult};
pub use limits::Limits;
pub use record::{
    Record, RecordTag, FIELD_COUNT, SAMPLE_RECORD_SIZE, TAG_SIZE, TIMESTAMP_RECORD_SIZE,
};
pub use stream::StreamDecoder;
