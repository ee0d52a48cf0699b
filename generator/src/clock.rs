//! Timestamp accumulator carried across files.

use crate::error::{GenError, GenResult};

/// Running sum of per-file timestamp increments.
///
/// The clock is a plain value: each file takes the previous clock and
/// returns the advanced one, so a run is a fold over file indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimestampClock(u32);

impl TimestampClock {
    /// Creates a clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the clock advanced by `step`.
    pub fn advance(self, step: u32) -> GenResult<Self> {
        match self.0.checked_add(step) {
            Some(raw) => Ok(Self(raw)),
            None => Err(GenError::TimestampOverflow {
                current: self.0,
                step,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(TimestampClock::new().raw(), 0);
        assert_eq!(TimestampClock::default(), TimestampClock::new());
    }

    #[test]
    fn advance_adds_step() {
        let clock = TimestampClock::new().advance(3).unwrap().advance(5).unwrap();
        assert_eq!(clock.raw(), 8);
    }

    #[test]
    fn zero_step_keeps_value() {
        let clock = TimestampClock::from_raw(17);
        assert_eq!(clock.advance(0).unwrap(), clock);
    }

    #[test]
    fn advance_never_decreases() {
        let clock = TimestampClock::from_raw(100);
        for step in 0..=8 {
            assert!(clock.advance(step).unwrap() >= clock);
        }
    }

    #[test]
    fn overflow_is_an_error() {
        let err = TimestampClock::from_raw(u32::MAX - 1).advance(2).unwrap_err();
        assert!(matches!(
            err,
            GenError::TimestampOverflow {
                current,
                step: 2,
            } if current == u32::MAX - 1
        ));
    }
}
