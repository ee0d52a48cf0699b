//! Configurable limits for bounded decoding.

/// Limits enforced by [`decode_records`](crate::decode_records).
///
/// A record file carries no length prefix, so the only way to bound the work
/// done on an arbitrary input is to check its size up front and stop after a
/// fixed number of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes.
    pub max_file_bytes: usize,

    /// Maximum number of records decoded from one input.
    pub max_records: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Generated files are 25580 bytes; leave room for hand-made fixtures.
            max_file_bytes: 1024 * 1024,
            max_records: 64 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_file_bytes: 4096,
            max_records: 64,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_file_bytes: usize::MAX,
            max_records: usize::MAX,
        }
    }
}
