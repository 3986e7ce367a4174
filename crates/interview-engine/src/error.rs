//! Error types for interview-engine operations.

use thiserror::Error;

use crate::calendar::PersonId;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month out of range: {0} (expected 1..=12)")]
    InvalidMonth(u32),

    #[error("day out of range: {0} (expected 1..=31)")]
    InvalidDay(u32),

    #[error("start hour out of range: {0} (expected 0..=23)")]
    InvalidHour(u32),

    #[error("timeslot key out of range: {0}")]
    InvalidKey(u64),

    #[error("unknown participant id: {0}")]
    UnknownParticipant(PersonId),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
