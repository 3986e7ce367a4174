//! # interview-engine
//!
//! Interview scheduling availability: candidates and interviewers each own a
//! calendar of discrete one-hour slots, and the engine computes the slots at
//! which a candidate and any number of interviewers can all meet.
//!
//! All slots are exactly one hour, identified by calendar date and starting
//! hour in a single implicit timezone. Everything is a pure, synchronous
//! in-memory computation: no persistence, no clock access, no internal
//! locking (callers serialize mutation of any one calendar).
//!
//! ## Quick start
//!
//! ```rust
//! use interview_engine::InterviewCalendar;
//!
//! let mut calendar = InterviewCalendar::new();
//! let candidate = calendar.add_candidate("Johanna");
//! let interviewer = calendar.add_interviewer("Philipp");
//!
//! calendar.add_available_range(candidate, 2018, 10, 22, 9, 11).unwrap();
//! calendar.add_available_range(interviewer, 2018, 10, 22, 10, 16).unwrap();
//!
//! let common = calendar.intersection_with(candidate, interviewer).unwrap();
//! let hours: Vec<u32> = common.iter().map(|s| s.start_hour()).collect();
//! assert_eq!(hours, vec![10]);
//! ```
//!
//! ## Modules
//!
//! - [`timeslot`] — the one-hour [`Timeslot`] value type
//! - [`availability`] — per-participant [`Availability`] sets and intersection
//! - [`calendar`] — the [`InterviewCalendar`] participant registry
//! - [`error`] — error types

pub mod availability;
pub mod calendar;
pub mod error;
pub mod timeslot;

pub use availability::Availability;
pub use calendar::{InterviewCalendar, Person, PersonId, Role};
pub use error::CalendarError;
pub use timeslot::Timeslot;
