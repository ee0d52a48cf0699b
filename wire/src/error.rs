//! Error types for record layout operations.

use std::fmt;

/// Result type for record decoding.
pub type WireResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding records.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Tag byte does not name a known record kind.
    UnknownTag { tag: u8, offset: usize },

    /// Buffer ends in the middle of a record.
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    FileBytes,
    RecordCount,
}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    BufferTooSmall { needed: usize, available: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTag { tag, offset } => {
                write!(f, "unknown record tag 0x{tag:02X} at byte {offset}")
            }
            Self::Truncated {
                offset,
                needed,
                available,
            } => {
                write!(
                    f,
                    "truncated record at byte {offset}: need {needed} bytes, have {available}"
                )
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileBytes => "file bytes",
            Self::RecordCount => "record count",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: need {needed}, have {available}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl std::error::Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display_unknown_tag() {
        let err = DecodeError::UnknownTag {
            tag: 0xAB,
            offset: 30,
        };
        let msg = err.to_string();
        assert!(msg.contains("0xAB"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn decode_error_display_truncated() {
        let err = DecodeError::Truncated {
            offset: 5,
            needed: 25,
            available: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("truncated"));
        assert!(msg.contains("25"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn decode_error_display_limits_exceeded() {
        let err = DecodeError::LimitsExceeded {
            kind: LimitKind::RecordCount,
            limit: 4,
            actual: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("record count"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn encode_error_display() {
        let err = EncodeError::BufferTooSmall {
            needed: 25,
            available: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("buffer too small"));
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<DecodeError>();
        assert_error::<EncodeError>();
    }
}
