//! Multi-file generation runs.

use std::path::Path;

use tracing::info;

use crate::clock::TimestampClock;
use crate::config::GeneratorConfig;
use crate::error::GenResult;
use crate::file::{generate_file, GeneratedFile};
use crate::random::RandomSource;

/// Files written by one run, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunSummary {
    pub files: Vec<GeneratedFile>,
    pub final_clock: TimestampClock,
}

/// Generates `config.file_count` files into `dir`, in index order.
///
/// The timestamp clock starts at zero and each file's clock seeds the next,
/// so embedded timestamps are non-decreasing across the run. Any failure
/// stops the run; files already written are left in place.
pub fn generate_run<R: RandomSource + ?Sized>(
    dir: &Path,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GenResult<RunSummary> {
    config.validate()?;

    let mut clock = TimestampClock::new();
    let mut files = Vec::with_capacity(config.file_count);
    for index in 0..config.file_count {
        let file = generate_file(dir, index, clock, config, rng)?;
        clock = file.clock();
        files.push(file);
    }

    info!(
        files = files.len(),
        final_timestamp = clock.raw(),
        dir = %dir.display(),
        "generation run complete"
    );
    Ok(RunSummary {
        files,
        final_clock: clock,
    })
}
