use chrono::{DateTime, TimeZone, Utc};

use crate::allotment::domain::{
    Applicant, ApplicationForm, Room, RoomId, RoomType, SpecialPriority, StudentId,
};
use crate::allotment::inventory::RoomInventory;
use crate::allotment::scoring::ScoringConfig;
use crate::allotment::service::AllotmentSystem;

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn room(id: &str, room_type: RoomType, occupied: u8) -> Room {
    Room {
        id: RoomId(id.to_string()),
        room_type,
        capacity: room_type.capacity(),
        occupied,
        floor: 1,
        building: id[..1].to_string(),
    }
}

pub(super) fn rooms() -> Vec<Room> {
    vec![
        room("A101", RoomType::Single, 0),
        room("A102", RoomType::Double, 0),
        room("A103", RoomType::Triple, 1),
        room("A201", RoomType::Single, 1),
        room("B201", RoomType::Single, 0),
        room("B202", RoomType::Double, 2),
    ]
}

pub(super) fn inventory() -> RoomInventory {
    RoomInventory::new(rooms()).expect("valid seed")
}

/// Applicant with a pinned score and sequence, bypassing intake.
pub(super) fn scored(id: &str, score: f64, sequence: u64) -> Applicant {
    Applicant {
        name: format!("Student {id}"),
        student_id: StudentId(id.to_string()),
        gpa: 3.0,
        special_priority: SpecialPriority::None,
        preferences: Vec::new(),
        submitted_at: now(),
        priority_score: score,
        sequence,
    }
}

pub(super) fn scored_with_prefs(
    id: &str,
    score: f64,
    sequence: u64,
    preferences: &[&str],
) -> Applicant {
    let mut applicant = scored(id, score, sequence);
    applicant.preferences = preferences
        .iter()
        .map(|room| RoomId((*room).to_string()))
        .collect();
    applicant
}

pub(super) fn form(
    name: &str,
    student_id: &str,
    gpa: f64,
    special_priority: &str,
    preferences: &[&str],
) -> ApplicationForm {
    ApplicationForm {
        name: name.to_string(),
        student_id: student_id.to_string(),
        gpa,
        special_priority: special_priority.to_string(),
        preferences: preferences
            .iter()
            .map(|id| RoomId((*id).to_string()))
            .collect(),
        submitted_at: now(),
    }
}

pub(super) fn system() -> AllotmentSystem {
    AllotmentSystem::new(ScoringConfig::default(), inventory())
}

/// Checks the max-heap shape on a heap-order snapshot: no child outranks
/// its parent.
pub(super) fn assert_heap_shape(snapshot: &[Applicant]) {
    for index in 1..snapshot.len() {
        let parent = &snapshot[(index - 1) / 2];
        let child = &snapshot[index];
        let child_outranks = child.priority_score > parent.priority_score
            || (child.priority_score == parent.priority_score
                && child.sequence < parent.sequence);
        assert!(
            !child_outranks,
            "heap violated at index {index}: child {}/{} over parent {}/{}",
            child.priority_score, child.sequence, parent.priority_score, parent.sequence
        );
    }
}
