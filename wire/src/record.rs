//! Record kinds and layout constants.

use crate::error::{DecodeError, WireResult};

/// Number of `u32` fields carried by a sample record.
pub const FIELD_COUNT: usize = 6;

/// Size of the leading tag byte.
pub const TAG_SIZE: usize = 1;

/// Encoded size of a timestamp record (tag + `u32`).
pub const TIMESTAMP_RECORD_SIZE: usize = TAG_SIZE + 4;

/// Encoded size of a sample record (tag + six `u32`).
pub const SAMPLE_RECORD_SIZE: usize = TAG_SIZE + FIELD_COUNT * 4;

/// Leading byte of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RecordTag {
    Timestamp = 0,
    Sample = 1,
}

impl RecordTag {
    /// Parses a record tag from a raw byte.
    ///
    /// `offset` is only used to locate the byte in the error.
    pub const fn parse(tag: u8, offset: usize) -> WireResult<Self> {
        match tag {
            0 => Ok(Self::Timestamp),
            1 => Ok(Self::Sample),
            _ => Err(DecodeError::UnknownTag { tag, offset }),
        }
    }

    /// Returns the raw tag byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Returns the full encoded size of a record with this tag.
    #[must_use]
    pub const fn record_size(self) -> usize {
        match self {
            Self::Timestamp => TIMESTAMP_RECORD_SIZE,
            Self::Sample => SAMPLE_RECORD_SIZE,
        }
    }
}

/// A single record in a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Record {
    /// Accumulated timestamp marker.
    Timestamp { timestamp: u32 },
    /// Six order-statistic field values.
    Sample { fields: [u32; FIELD_COUNT] },
}

impl Record {
    #[must_use]
    pub const fn timestamp(timestamp: u32) -> Self {
        Self::Timestamp { timestamp }
    }

    #[must_use]
    pub const fn sample(fields: [u32; FIELD_COUNT]) -> Self {
        Self::Sample { fields }
    }

    #[must_use]
    pub const fn tag(&self) -> RecordTag {
        match self {
            Self::Timestamp { .. } => RecordTag::Timestamp,
            Self::Sample { .. } => RecordTag::Sample,
        }
    }

    /// Returns the number of bytes this record occupies on disk.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        self.tag().record_size()
    }

    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp { .. })
    }
}
