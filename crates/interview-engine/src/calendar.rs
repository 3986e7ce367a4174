//! Participant registry: candidates, interviewers, and their calendars.
//!
//! [`InterviewCalendar`] owns every participant and routes slot mutations and
//! intersection queries to the right [`Availability`] by participant id. Ids
//! come from a per-registry monotonic counter shared across roles, so an id
//! identifies a person regardless of whether they interview or are
//! interviewed.
//!
//! Looking up an unknown id is an explicit [`CalendarError::UnknownParticipant`],
//! never a silent skip: an intersection query naming a missing interviewer
//! fails rather than returning a result computed over fewer people than the
//! caller asked about.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::availability::Availability;
use crate::error::{CalendarError, Result};
use crate::timeslot::Timeslot;

/// Registry-assigned participant identifier.
pub type PersonId = u32;

/// Which side of the interview table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Candidate,
    Interviewer,
}

/// A registered participant and their calendar.
///
/// Not serializable: the registry's invariants (ids assigned by its counter,
/// map key matching the person's id) cannot be re-established from an
/// arbitrary payload, and persistence is out of scope anyway.
#[derive(Debug, Clone)]
pub struct Person {
    id: PersonId,
    name: String,
    role: Role,
    availability: Availability,
}

impl Person {
    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Read-only view of this person's calendar.
    pub fn availability(&self) -> &Availability {
        &self.availability
    }
}

/// The scheduling registry.
#[derive(Debug, Clone, Default)]
pub struct InterviewCalendar {
    next_id: PersonId,
    people: HashMap<PersonId, Person>,
}

impl InterviewCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_person(&mut self, name: &str, role: Role) -> PersonId {
        let id = self.next_id;
        self.next_id += 1;
        self.people.insert(
            id,
            Person {
                id,
                name: name.to_string(),
                role,
                availability: Availability::new(),
            },
        );
        id
    }

    /// Register a candidate with an empty calendar; returns their id.
    pub fn add_candidate(&mut self, name: &str) -> PersonId {
        self.add_person(name, Role::Candidate)
    }

    /// Register an interviewer with an empty calendar; returns their id.
    pub fn add_interviewer(&mut self, name: &str) -> PersonId {
        self.add_person(name, Role::Interviewer)
    }

    /// Remove a participant. Returns `false` if the id was not registered.
    pub fn remove_person(&mut self, id: PersonId) -> bool {
        self.people.remove(&id).is_some()
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn is_candidate(&self, id: PersonId) -> bool {
        matches!(self.people.get(&id), Some(p) if p.role == Role::Candidate)
    }

    pub fn is_interviewer(&self, id: PersonId) -> bool {
        matches!(self.people.get(&id), Some(p) if p.role == Role::Interviewer)
    }

    /// Ids of all registered candidates, in no particular order.
    pub fn candidates(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.ids_with_role(Role::Candidate)
    }

    /// Ids of all registered interviewers, in no particular order.
    pub fn interviewers(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.ids_with_role(Role::Interviewer)
    }

    fn ids_with_role(&self, role: Role) -> impl Iterator<Item = PersonId> + '_ {
        self.people
            .values()
            .filter(move |p| p.role == role)
            .map(|p| p.id)
    }

    /// Read-only view of a participant's calendar.
    ///
    /// # Errors
    ///
    /// `CalendarError::UnknownParticipant` if the id is not registered.
    pub fn availability(&self, id: PersonId) -> Result<&Availability> {
        self.people
            .get(&id)
            .map(Person::availability)
            .ok_or(CalendarError::UnknownParticipant(id))
    }

    fn availability_mut(&mut self, id: PersonId) -> Result<&mut Availability> {
        self.people
            .get_mut(&id)
            .map(|p| &mut p.availability)
            .ok_or(CalendarError::UnknownParticipant(id))
    }

    /// Mark one slot available in a participant's calendar.
    pub fn add_available_slot(&mut self, id: PersonId, slot: Timeslot) -> Result<()> {
        self.availability_mut(id)?.add_slot(slot);
        Ok(())
    }

    /// Mark every hour in `[start_hour, end_hour)` on the given date available
    /// in a participant's calendar.
    pub fn add_available_range(
        &mut self,
        id: PersonId,
        year: u32,
        month: u32,
        day: u32,
        start_hour: u32,
        end_hour: u32,
    ) -> Result<()> {
        self.availability_mut(id)?
            .add_range(year, month, day, start_hour, end_hour)
    }

    /// Mark one slot unavailable in a participant's calendar.
    pub fn remove_unavailable_slot(&mut self, id: PersonId, slot: Timeslot) -> Result<()> {
        self.availability_mut(id)?.remove_slot(slot);
        Ok(())
    }

    /// Mark every hour in `[start_hour, end_hour)` on the given date
    /// unavailable in a participant's calendar.
    pub fn remove_unavailable_range(
        &mut self,
        id: PersonId,
        year: u32,
        month: u32,
        day: u32,
        start_hour: u32,
        end_hour: u32,
    ) -> Result<()> {
        self.availability_mut(id)?
            .remove_range(year, month, day, start_hour, end_hour)
    }

    /// Slots at which the candidate and every listed interviewer are all
    /// available.
    ///
    /// With an empty `interviewer_ids` the result is a copy of the
    /// candidate's own calendar.
    ///
    /// # Errors
    ///
    /// `CalendarError::UnknownParticipant` if the candidate or any
    /// interviewer id is not registered.
    pub fn intersection<I>(&self, candidate_id: PersonId, interviewer_ids: I) -> Result<Availability>
    where
        I: IntoIterator<Item = PersonId>,
    {
        let candidate = self.availability(candidate_id)?;
        let interviewers: Vec<&Availability> = interviewer_ids
            .into_iter()
            .map(|id| self.availability(id))
            .collect::<Result<_>>()?;
        Ok(candidate.intersect(interviewers))
    }

    /// One-interviewer convenience form of [`intersection`](Self::intersection).
    pub fn intersection_with(
        &self,
        candidate_id: PersonId,
        interviewer_id: PersonId,
    ) -> Result<Availability> {
        self.intersection(candidate_id, std::iter::once(interviewer_id))
    }
}
