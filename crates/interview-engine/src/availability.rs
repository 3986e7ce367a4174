//! Per-participant availability sets and multi-way intersection.
//!
//! Each participant owns one [`Availability`]: an ordered, duplicate-free
//! collection of [`Timeslot`]s. The core scheduling question — "when can a
//! candidate and N interviewers all meet?" — is answered by
//! [`Availability::intersect`], a pure repeated set-intersection that leaves
//! every input untouched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timeslot::Timeslot;

/// The set of one-hour slots at which a single participant is available.
///
/// Backed by a `BTreeSet`, so iteration is always chronological ascending and
/// a slot can never appear twice. Read access never hands out a mutable alias
/// of the backing set; mutation goes through the add/remove methods only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    slots: BTreeSet<Timeslot>,
}

impl Availability {
    /// An empty availability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a slot as available. No-op if it is already present.
    pub fn add_slot(&mut self, slot: Timeslot) {
        self.slots.insert(slot);
    }

    /// Mark every hour in the half-open range `[start_hour, end_hour)` on the
    /// given date as available.
    ///
    /// `end_hour <= start_hour` is an empty range and adds nothing; it is not
    /// an error. `end_hour` may be 24 (a range ending at midnight).
    ///
    /// # Errors
    ///
    /// Component validation errors from [`Timeslot::new`]. Hours already
    /// added before the failing one stay added.
    pub fn add_range(
        &mut self,
        year: u32,
        month: u32,
        day: u32,
        start_hour: u32,
        end_hour: u32,
    ) -> Result<()> {
        for hour in start_hour..end_hour {
            self.add_slot(Timeslot::new(year, month, day, hour)?);
        }
        Ok(())
    }

    /// Mark a slot as unavailable. No-op if it is not present.
    pub fn remove_slot(&mut self, slot: Timeslot) {
        self.slots.remove(&slot);
    }

    /// Mark every slot in the collection as unavailable. Bulk counterpart of
    /// [`remove_slot`](Self::remove_slot); absent slots are skipped. The bulk
    /// add form is the `Extend<Timeslot>` impl.
    pub fn remove_slots<I>(&mut self, slots: I)
    where
        I: IntoIterator<Item = Timeslot>,
    {
        for slot in slots {
            self.remove_slot(slot);
        }
    }

    /// Mark every hour in the half-open range `[start_hour, end_hour)` on the
    /// given date as unavailable. Symmetric to [`add_range`](Self::add_range):
    /// empty ranges and absent slots are no-ops, not errors.
    ///
    /// # Errors
    ///
    /// Component validation errors from [`Timeslot::new`].
    pub fn remove_range(
        &mut self,
        year: u32,
        month: u32,
        day: u32,
        start_hour: u32,
        end_hour: u32,
    ) -> Result<()> {
        for hour in start_hour..end_hour {
            self.remove_slot(Timeslot::new(year, month, day, hour)?);
        }
        Ok(())
    }

    pub fn contains(&self, slot: &Timeslot) -> bool {
        self.slots.contains(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over the slots in chronological ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Timeslot> {
        self.slots.iter()
    }

    /// Snapshot of the slots as an ascending `Vec`, detached from this set.
    pub fn to_vec(&self) -> Vec<Timeslot> {
        self.slots.iter().copied().collect()
    }

    /// Slots present in `self` and in every set in `others`.
    ///
    /// Standard repeated set-intersection: starts from `self` and retains, for
    /// each other set in turn, only the slots that set also contains. The
    /// order of `others` does not affect the result. With no `others` the
    /// result is a copy of `self` (the single-participant degenerate case).
    ///
    /// Returns a new set; neither `self` nor any input is mutated. An empty
    /// participant anywhere simply yields an empty result.
    pub fn intersect<'a, I>(&self, others: I) -> Availability
    where
        I: IntoIterator<Item = &'a Availability>,
    {
        let mut common = self.slots.clone();
        for other in others {
            common.retain(|slot| other.contains(slot));
            if common.is_empty() {
                break;
            }
        }
        Availability { slots: common }
    }
}

impl<'a> IntoIterator for &'a Availability {
    type Item = &'a Timeslot;
    type IntoIter = std::collections::btree_set::Iter<'a, Timeslot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl Extend<Timeslot> for Availability {
    fn extend<T: IntoIterator<Item = Timeslot>>(&mut self, iter: T) {
        self.slots.extend(iter);
    }
}

impl FromIterator<Timeslot> for Availability {
    fn from_iter<T: IntoIterator<Item = Timeslot>>(iter: T) -> Self {
        Availability {
            slots: iter.into_iter().collect(),
        }
    }
}
