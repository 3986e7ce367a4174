//! One-hour interview slots identified by date and start hour.
//!
//! A [`Timeslot`] covers exactly `[start_hour, start_hour + 1)` on a given
//! calendar date in a single implicit timezone. Identity, equality, and
//! chronological ordering all derive from the four date/hour components, so
//! two slots constructed from the same components are interchangeable.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// A one-hour slot on a specific date.
///
/// Fields are ordered `(year, month, day, start_hour)` so the derived `Ord`
/// is chronological ascending. Construction validates the components, which
/// makes the compact numeric [`key`](Timeslot::key) collision-free: key
/// equality and key ordering coincide with structural equality and ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "RawTimeslot")]
pub struct Timeslot {
    year: u32,
    month: u32,
    day: u32,
    start_hour: u32,
}

/// Unvalidated wire form. Deserialization goes through [`Timeslot::new`] so
/// out-of-range components are rejected at the serde boundary too, not just
/// at construction.
#[derive(Deserialize)]
struct RawTimeslot {
    year: u32,
    month: u32,
    day: u32,
    start_hour: u32,
}

impl TryFrom<RawTimeslot> for Timeslot {
    type Error = CalendarError;

    fn try_from(raw: RawTimeslot) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day, raw.start_hour)
    }
}

impl Timeslot {
    /// Create a slot for the given date and start hour (24-hour clock).
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidMonth` for a month outside `1..=12`,
    /// `CalendarError::InvalidDay` for a day outside `1..=31`, and
    /// `CalendarError::InvalidHour` for a start hour outside `0..=23`.
    /// The day is not checked against the month's actual length.
    pub fn new(year: u32, month: u32, day: u32, start_hour: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(CalendarError::InvalidDay(day));
        }
        if start_hour > 23 {
            return Err(CalendarError::InvalidHour(start_hour));
        }
        Ok(Self {
            year,
            month,
            day,
            start_hour,
        })
    }

    /// Compact numeric identity in the decimal shape `yyyymmddhh`.
    ///
    /// Useful as a hashmap key or for external ids. Ascending key order is
    /// chronological order.
    pub fn key(&self) -> u64 {
        u64::from(self.year) * 1_000_000
            + u64::from(self.month) * 10_000
            + u64::from(self.day) * 100
            + u64::from(self.start_hour)
    }

    /// Decode a slot from its [`key`](Timeslot::key) representation.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidKey` when the year digits do not fit
    /// a `u32`, and otherwise the same validation errors as
    /// [`Timeslot::new`] when the decoded components are out of range
    /// (e.g. a key not produced by `key()`).
    pub fn from_key(key: u64) -> Result<Self> {
        let year = u32::try_from(key / 1_000_000).map_err(|_| CalendarError::InvalidKey(key))?;
        let month = ((key % 1_000_000) / 10_000) as u32;
        let day = ((key % 10_000) / 100) as u32;
        let start_hour = (key % 100) as u32;
        Self::new(year, month, day, start_hour)
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Starting hour of the slot; the slot always ends one hour later.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }
}
