//! Building and writing a single record file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use wire::{encode_records, Record};

use crate::clock::TimestampClock;
use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};
use crate::matrix::SampleMatrix;
use crate::random::RandomSource;

/// Records of one file, before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecords {
    pub records: Vec<Record>,
    /// Position of the timestamp record.
    pub rt_offset: usize,
    /// Clock after this file's increment; also the embedded timestamp.
    pub clock: TimestampClock,
}

/// Outcome of writing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratedFile {
    pub index: usize,
    pub path: PathBuf,
    pub bytes_written: usize,
    pub rt_offset: usize,
    pub timestamp: u32,
}

impl GeneratedFile {
    /// Clock value to pass to the next file.
    #[must_use]
    pub const fn clock(&self) -> TimestampClock {
        TimestampClock::from_raw(self.timestamp)
    }
}

/// Output file name for a file index.
#[must_use]
pub fn file_name(index: usize) -> String {
    format!("s{index}.dat")
}

/// Builds the records of one file without touching the filesystem.
///
/// Draw order: the sample matrix, then the timestamp increment, then the
/// timestamp position.
pub fn build_records<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    clock: TimestampClock,
    rng: &mut R,
) -> GenResult<FileRecords> {
    config.validate()?;

    let matrix = SampleMatrix::generate(config, rng)?;
    let step = rng.draw_inclusive(config.timestamp_step_max)?;
    let clock = clock.advance(step)?;
    let rt_offset = rng.draw_inclusive(config.rt_offset_max)? as usize;
    debug!(step, timestamp = clock.raw(), rt_offset, "drew file layout");

    let records = (0..config.record_count)
        .map(|position| {
            if position == rt_offset {
                Record::timestamp(clock.raw())
            } else {
                Record::sample(matrix.row(position))
            }
        })
        .collect();

    Ok(FileRecords {
        records,
        rt_offset,
        clock,
    })
}

/// Generates `s{index}.dat` inside `dir`.
///
/// The file is fully serialized before it is created. If writing fails the
/// partial file is removed and the I/O error is returned.
pub fn generate_file<R: RandomSource + ?Sized>(
    dir: &Path,
    index: usize,
    clock: TimestampClock,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GenResult<GeneratedFile> {
    let built = build_records(config, clock, rng)?;
    let bytes = encode_records(&built.records);
    let path = dir.join(file_name(index));

    write_file(&path, &bytes)?;
    info!(
        index,
        path = %path.display(),
        bytes = bytes.len(),
        rt_offset = built.rt_offset,
        timestamp = built.clock.raw(),
        "generated record file"
    );

    Ok(GeneratedFile {
        index,
        path,
        bytes_written: bytes.len(),
        rt_offset: built.rt_offset,
        timestamp: built.clock.raw(),
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> GenResult<()> {
    let result = fs::File::create(path).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    if let Err(source) = result {
        if path.exists() {
            if let Err(err) = fs::remove_file(path) {
                warn!(path = %path.display(), %err, "failed to remove partial file");
            }
        }
        return Err(GenError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
