//! Incremental, byte-at-a-time record decoding.

use crate::codec::decode_body;
use crate::error::WireResult;
use crate::record::{Record, RecordTag, SAMPLE_RECORD_SIZE, TAG_SIZE};

const MAX_BODY: usize = SAMPLE_RECORD_SIZE - TAG_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for a tag byte.
    OutOfSync,
    /// Collecting the body of a record.
    Collecting { tag: RecordTag, len: usize },
}

/// Decoder for records that arrive one byte at a time.
///
/// The decoder starts out of sync and expects a tag byte. Once a tag is seen
/// it collects exactly the body length for that record kind, emits the
/// record and drops back to waiting for the next tag. A byte that is not a
/// known tag is reported as an error and the decoder stays out of sync, so
/// the caller may keep pushing to resynchronize.
#[derive(Debug, Clone)]
pub struct StreamDecoder {
    state: State,
    body: [u8; MAX_BODY],
    bytes_seen: usize,
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamDecoder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::OutOfSync,
            body: [0; MAX_BODY],
            bytes_seen: 0,
        }
    }

    /// Feeds one byte; returns a record when one completes.
    pub fn push(&mut self, byte: u8) -> WireResult<Option<Record>> {
        let offset = self.bytes_seen;
        self.bytes_seen += 1;

        match self.state {
            State::OutOfSync => {
                let tag = RecordTag::parse(byte, offset)?;
                self.state = State::Collecting { tag, len: 0 };
                Ok(None)
            }
            State::Collecting { tag, len } => {
                self.body[len] = byte;
                let len = len + 1;
                let body_len = tag.record_size() - TAG_SIZE;
                if len == body_len {
                    self.state = State::OutOfSync;
                    Ok(Some(decode_body(tag, &self.body[..body_len])))
                } else {
                    self.state = State::Collecting { tag, len };
                    Ok(None)
                }
            }
        }
    }

    /// Feeds a chunk, collecting every completed record.
    ///
    /// Stops at the first error; bytes after the failing one are not consumed.
    pub fn push_slice(&mut self, bytes: &[u8]) -> WireResult<Vec<Record>> {
        let mut records = Vec::new();
        for &byte in bytes {
            if let Some(record) = self.push(byte)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Returns `true` if no record is partially collected.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, State::OutOfSync)
    }

    /// Total bytes pushed so far.
    #[must_use]
    pub const fn bytes_seen(&self) -> usize {
        self.bytes_seen
    }

    /// Drops any partially collected record.
    pub fn reset(&mut self) {
        self.state = State::OutOfSync;
    }
}
