//! Error types for file generation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for generator operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that abort a generation run.
#[derive(Debug)]
#[non_exhaustive]
pub enum GenError {
    /// Creating or writing an output file failed.
    Io { path: PathBuf, source: io::Error },

    /// The random source could not produce a value.
    Random { reason: String },

    /// The generator configuration cannot produce a valid file.
    InvalidConfig(ConfigError),

    /// Advancing the timestamp accumulator would overflow `u32`.
    TimestampOverflow { current: u32, step: u32 },
}

/// Configuration problems detected by
/// [`GeneratorConfig::validate`](crate::GeneratorConfig::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A file must hold at least the timestamp record.
    NoRecords,
    /// The timestamp position could land past the last record.
    OffsetOutOfRange {
        rt_offset_max: u32,
        record_count: usize,
    },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "write {}: {source}", path.display()),
            Self::Random { reason } => write!(f, "random source failed: {reason}"),
            Self::InvalidConfig(err) => write!(f, "invalid generator config: {err}"),
            Self::TimestampOverflow { current, step } => {
                write!(f, "timestamp overflow: {current} + {step} exceeds u32")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRecords => write!(f, "record count must be non-zero"),
            Self::OffsetOutOfRange {
                rt_offset_max,
                record_count,
            } => {
                write!(
                    f,
                    "timestamp offset max {rt_offset_max} does not fit in {record_count} records"
                )
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for GenError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl From<rand::Error> for GenError {
    fn from(err: rand::Error) -> Self {
        Self::Random {
            reason: err.to_string(),
        }
    }
}
