//! Generator for sdat record files.
//!
//! Each generated file holds a fixed number of records: one timestamp record
//! at a random position near the start of the file and sample records
//! everywhere else. Sample records are read row by row out of six
//! independently sorted columns of random values, so every field is
//! non-decreasing across the file.
//!
//! # Design Principles
//!
//! - **Explicit state** - The timestamp accumulator is a value passed from
//!   one file to the next, never a global.
//! - **Deterministic** - All randomness flows through [`RandomSource`]; the
//!   same seed produces byte-identical files.
//! - **Fail fast** - Any I/O or random source error aborts the run.
//!
//! # Example
//!
//! ```
//! use generator::{build_records, GeneratorConfig, RngSource, TimestampClock};
//!
//! let config = GeneratorConfig::default();
//! let mut rng = RngSource::seeded(1);
//! let built = build_records(&config, TimestampClock::new(), &mut rng).unwrap();
//! assert_eq!(built.records.len(), 1024);
//! assert_eq!(wire::encode_records(&built.records).len(), 25_580);
//! ```

mod clock;
mod config;
mod error;
mod file;
mod matrix;
mod random;
mod run;

pub use clock::TimestampClock;
pub use config::{
    GeneratorConfig, FILE_COUNT, RECORD_COUNT, RT_OFFSET_MAX, SAMPLE_VALUE_MAX,
    TIMESTAMP_STEP_MAX,
};
pub use error::{ConfigError, GenError, GenResult};
pub use file::{build_records, file_name, generate_file, FileRecords, GeneratedFile};
pub use matrix::SampleMatrix;
pub use random::{RandomSource, RngSource};
pub use run::{generate_run, RunSummary};
