//! Generation constants and configuration.

use crate::error::{ConfigError, GenResult};

/// Records per generated file.
pub const RECORD_COUNT: usize = 1024;

/// Inclusive upper bound of sample field values.
pub const SAMPLE_VALUE_MAX: u32 = 1024;

/// Inclusive upper bound of the timestamp record position.
pub const RT_OFFSET_MAX: u32 = 8;

/// Inclusive upper bound of the per-file timestamp increment.
pub const TIMESTAMP_STEP_MAX: u32 = 8;

/// Files produced by a default run.
pub const FILE_COUNT: usize = 2;

/// Sizes and value ranges used to build record files.
///
/// The defaults are the fixed production constants. Other values exist so
/// tests can exercise the same algorithm on small files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of records in each file.
    pub record_count: usize,
    /// Sample values are drawn from `0..=sample_value_max`.
    pub sample_value_max: u32,
    /// The timestamp record position is drawn from `0..=rt_offset_max`.
    pub rt_offset_max: u32,
    /// The per-file timestamp increment is drawn from `0..=timestamp_step_max`.
    pub timestamp_step_max: u32,
    /// Number of files produced by [`generate_run`](crate::generate_run).
    pub file_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: RECORD_COUNT,
            sample_value_max: SAMPLE_VALUE_MAX,
            rt_offset_max: RT_OFFSET_MAX,
            timestamp_step_max: TIMESTAMP_STEP_MAX,
            file_count: FILE_COUNT,
        }
    }
}

impl GeneratorConfig {
    /// Creates a config with small files for fast tests.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            record_count: 16,
            sample_value_max: SAMPLE_VALUE_MAX,
            rt_offset_max: RT_OFFSET_MAX,
            timestamp_step_max: TIMESTAMP_STEP_MAX,
            file_count: FILE_COUNT,
        }
    }

    /// Checks that every file built from this config holds exactly one
    /// timestamp record.
    pub fn validate(&self) -> GenResult<()> {
        if self.record_count == 0 {
            return Err(ConfigError::NoRecords.into());
        }
        if self.rt_offset_max as usize >= self.record_count {
            return Err(ConfigError::OffsetOutOfRange {
                rt_offset_max: self.rt_offset_max,
                record_count: self.record_count,
            }
            .into());
        }
        Ok(())
    }

    /// Size in bytes of every file built from this config.
    #[must_use]
    pub const fn file_size(&self) -> usize {
        wire::TIMESTAMP_RECORD_SIZE + self.record_count.saturating_sub(1) * wire::SAMPLE_RECORD_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;

    #[test]
    fn default_config_matches_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.record_count, 1024);
        assert_eq!(config.sample_value_max, 1024);
        assert_eq!(config.rt_offset_max, 8);
        assert_eq!(config.timestamp_step_max, 8);
        assert_eq!(config.file_count, 2);
        config.validate().unwrap();
    }

    #[test]
    fn default_file_size() {
        assert_eq!(GeneratorConfig::default().file_size(), 25_580);
    }

    #[test]
    fn testing_config_is_smaller_and_valid() {
        let config = GeneratorConfig::for_testing();
        assert!(config.record_count < RECORD_COUNT);
        config.validate().unwrap();
        assert_eq!(config.file_size(), 5 + 15 * 25);
    }

    #[test]
    fn rejects_zero_records() {
        let config = GeneratorConfig {
            record_count: 0,
            rt_offset_max: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenError::InvalidConfig(ConfigError::NoRecords))
        ));
    }

    #[test]
    fn rejects_offset_past_last_record() {
        let config = GeneratorConfig {
            record_count: 8,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenError::InvalidConfig(ConfigError::OffsetOutOfRange {
                rt_offset_max: 8,
                record_count: 8,
            }))
        ));
    }

    #[test]
    fn accepts_offset_on_last_record() {
        let config = GeneratorConfig {
            record_count: 4,
            rt_offset_max: 3,
            ..GeneratorConfig::default()
        };
        config.validate().unwrap();
    }
}
