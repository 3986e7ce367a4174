//! Tests for Availability: add/remove semantics, half-open ranges, ordered
//! iteration, and multi-way intersection.

use interview_engine::{Availability, CalendarError, Timeslot};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn slot(year: u32, month: u32, day: u32, hour: u32) -> Timeslot {
    Timeslot::new(year, month, day, hour).unwrap()
}

fn hours(availability: &Availability) -> Vec<u32> {
    availability.iter().map(|s| s.start_hour()).collect()
}

// ── Add / remove ────────────────────────────────────────────────────────────

#[test]
fn starts_empty() {
    let availability = Availability::new();
    assert!(availability.is_empty());
    assert_eq!(availability.len(), 0);
}

#[test]
fn add_slot_is_idempotent() {
    let mut availability = Availability::new();
    availability.add_slot(slot(2018, 10, 22, 9));
    availability.add_slot(slot(2018, 10, 22, 9));
    assert_eq!(availability.len(), 1);
}

#[test]
fn remove_absent_slot_is_a_noop() {
    let mut availability = Availability::new();
    availability.add_slot(slot(2018, 10, 22, 9));
    availability.remove_slot(slot(2018, 10, 22, 10));
    assert_eq!(availability.len(), 1);
}

#[test]
fn add_range_is_half_open() {
    let mut availability = Availability::new();
    availability.add_range(2018, 10, 22, 9, 11).unwrap();

    assert_eq!(availability.len(), 2);
    assert!(availability.contains(&slot(2018, 10, 22, 9)));
    assert!(availability.contains(&slot(2018, 10, 22, 10)));
    assert!(!availability.contains(&slot(2018, 10, 22, 11)));
}

#[test]
fn add_range_twice_is_idempotent() {
    let mut availability = Availability::new();
    availability.add_range(2018, 10, 22, 9, 11).unwrap();
    let once = availability.clone();
    availability.add_range(2018, 10, 22, 9, 11).unwrap();
    assert_eq!(availability, once);
}

#[test]
fn empty_range_adds_nothing() {
    let mut availability = Availability::new();
    availability.add_range(2018, 10, 22, 11, 11).unwrap();
    availability.add_range(2018, 10, 22, 14, 9).unwrap();
    assert!(availability.is_empty());
}

#[test]
fn range_ending_at_midnight_is_valid() {
    let mut availability = Availability::new();
    availability.add_range(2018, 10, 22, 22, 24).unwrap();
    assert_eq!(hours(&availability), vec![22, 23]);
}

#[test]
fn range_with_invalid_hour_is_rejected() {
    let mut availability = Availability::new();
    assert_eq!(
        availability.add_range(2018, 10, 22, 23, 26),
        Err(CalendarError::InvalidHour(24))
    );
}

#[test]
fn extend_adds_slots_in_bulk() {
    let mut availability = Availability::new();
    availability.add_slot(slot(2018, 10, 22, 9));
    availability.extend([
        slot(2018, 10, 22, 9), // already present
        slot(2018, 10, 23, 11),
        slot(2018, 10, 25, 9),
    ]);

    assert_eq!(availability.len(), 3);
    assert!(availability.contains(&slot(2018, 10, 23, 11)));
}

#[test]
fn remove_slots_removes_in_bulk() {
    let mut availability = Availability::new();
    availability.add_range(2018, 10, 22, 9, 12).unwrap();

    availability.remove_slots([
        slot(2018, 10, 22, 9),
        slot(2018, 10, 22, 11),
        slot(2018, 10, 24, 9), // absent, skipped
    ]);

    assert_eq!(availability.to_vec(), vec![slot(2018, 10, 22, 10)]);
}

#[test]
fn remove_range_inverts_add_range() {
    let mut availability = Availability::new();
    availability.add_range(2018, 10, 22, 9, 12).unwrap();
    let before = availability.clone();

    availability.add_range(2018, 10, 23, 14, 18).unwrap();
    availability.remove_range(2018, 10, 23, 14, 18).unwrap();

    assert_eq!(availability, before);
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn iteration_is_chronological_regardless_of_insertion_order() {
    let mut availability = Availability::new();
    availability.add_slot(slot(2018, 10, 24, 9));
    availability.add_slot(slot(2018, 10, 22, 15));
    availability.add_slot(slot(2017, 12, 31, 23));
    availability.add_slot(slot(2018, 10, 22, 9));

    let keys: Vec<u64> = availability.iter().map(Timeslot::key).collect();
    assert_eq!(keys, vec![2017123123, 2018102209, 2018102215, 2018102409]);

    // to_vec yields the same ascending sequence, detached from the set.
    let snapshot = availability.to_vec();
    assert_eq!(snapshot.len(), 4);
    assert!(snapshot.windows(2).all(|w| w[0] < w[1]));
}

// ── Intersection ────────────────────────────────────────────────────────────

#[test]
fn intersect_with_no_others_copies_self() {
    let mut availability = Availability::new();
    availability.add_range(2018, 10, 22, 9, 12).unwrap();

    let result = availability.intersect([]);
    assert_eq!(result, availability);
}

#[test]
fn intersect_does_not_mutate_inputs() {
    let mut a = Availability::new();
    a.add_range(2018, 10, 22, 9, 14).unwrap();
    let mut b = Availability::new();
    b.add_range(2018, 10, 22, 12, 18).unwrap();

    let a_before = a.clone();
    let b_before = b.clone();
    let result = a.intersect([&b]);

    assert_eq!(hours(&result), vec![12, 13]);
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn intersect_disjoint_sets_is_empty() {
    let mut a = Availability::new();
    a.add_range(2018, 10, 22, 9, 12).unwrap();
    let mut b = Availability::new();
    b.add_range(2018, 10, 22, 14, 18).unwrap();

    assert!(a.intersect([&b]).is_empty());
}

#[test]
fn intersect_with_empty_participant_is_empty() {
    let mut a = Availability::new();
    a.add_range(2018, 10, 22, 9, 12).unwrap();
    let empty = Availability::new();

    assert!(a.intersect([&empty]).is_empty());
    assert!(empty.intersect([&a]).is_empty());
}

#[test]
fn intersect_is_commutative_over_others_order() {
    let mut a = Availability::new();
    a.add_range(2018, 10, 22, 9, 16).unwrap();
    let mut b = Availability::new();
    b.add_range(2018, 10, 22, 11, 18).unwrap();
    let mut c = Availability::new();
    c.add_range(2018, 10, 22, 8, 13).unwrap();

    let bc = a.intersect([&b, &c]);
    let cb = a.intersect([&c, &b]);
    assert_eq!(bc, cb);
    assert_eq!(hours(&bc), vec![11, 12]);
}

#[test]
fn intersect_three_ways() {
    let mut candidate = Availability::new();
    candidate.add_range(2018, 10, 22, 9, 14).unwrap();
    let mut first = Availability::new();
    first.add_range(2018, 10, 22, 10, 16).unwrap();
    let mut second = Availability::new();
    second.add_range(2018, 10, 22, 11, 12).unwrap();

    let result = candidate.intersect([&first, &second]);
    assert_eq!(result.to_vec(), vec![slot(2018, 10, 22, 11)]);
}

#[test]
fn intersection_result_is_chronological() {
    let mut a = Availability::new();
    a.add_range(2018, 10, 24, 9, 12).unwrap();
    a.add_range(2018, 10, 22, 9, 12).unwrap();
    let mut b = Availability::new();
    b.add_range(2018, 10, 22, 9, 18).unwrap();
    b.add_range(2018, 10, 24, 9, 18).unwrap();

    let result = a.intersect([&b]);
    let keys: Vec<u64> = result.iter().map(Timeslot::key).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
    assert_eq!(result.len(), 6);
}

// ── Serde boundary ──────────────────────────────────────────────────────────

#[test]
fn deserialization_validates_contained_slots() {
    // Slot validation also guards sets arriving through serde.
    let result: Result<Availability, _> = serde_json::from_str(
        r#"{"slots":[{"year":2018,"month":10,"day":22,"start_hour":100}]}"#,
    );
    assert!(result.is_err());
}

#[test]
fn serde_round_trip_preserves_slots() {
    let mut availability = Availability::new();
    availability.add_range(2018, 10, 22, 9, 12).unwrap();

    let json = serde_json::to_string(&availability).unwrap();
    let back: Availability = serde_json::from_str(&json).unwrap();
    assert_eq!(back, availability);
}
