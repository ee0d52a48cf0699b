//! Per-file sample field matrix.

use wire::FIELD_COUNT;

use crate::config::GeneratorConfig;
use crate::error::GenResult;
use crate::random::RandomSource;

/// Six independently drawn and independently sorted columns.
///
/// Row `i` is the rank-`i` order statistic of each column, so the values in
/// one row are not a sampled tuple; each column is non-decreasing by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMatrix {
    columns: [Vec<u32>; FIELD_COUNT],
}

impl SampleMatrix {
    /// Draws `config.record_count` values per column and sorts each column.
    ///
    /// Columns are filled one after another, column 0 first.
    pub fn generate<R: RandomSource + ?Sized>(
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> GenResult<Self> {
        let mut columns: [Vec<u32>; FIELD_COUNT] = Default::default();
        for column in &mut columns {
            column.reserve_exact(config.record_count);
            for _ in 0..config.record_count {
                column.push(rng.draw_inclusive(config.sample_value_max)?);
            }
            column.sort_unstable();
        }
        Ok(Self { columns })
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns[0].len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns one sorted column.
    #[must_use]
    pub fn column(&self, idx: usize) -> &[u32] {
        &self.columns[idx]
    }

    /// Returns the field values for the record at `position`.
    #[must_use]
    pub fn row(&self, position: usize) -> [u32; FIELD_COUNT] {
        std::array::from_fn(|idx| self.columns[idx][position])
    }
}
