use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered students.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for dormitory rooms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub String);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room size classes offered by the residence office. Capacity mirrors the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Triple,
}

impl RoomType {
    pub const fn capacity(self) -> u8 {
        match self {
            RoomType::Single => 1,
            RoomType::Double => 2,
            RoomType::Triple => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Triple => "Triple",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim() {
            "Single" => Some(RoomType::Single),
            "Double" => Some(RoomType::Double),
            "Triple" => Some(RoomType::Triple),
            _ => None,
        }
    }
}

/// Special-priority categories recognized by the allotment policy.
///
/// The multiplier table is exhaustive by construction; labels outside the
/// known set are rejected at the intake boundary rather than silently
/// scored with a missing weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialPriority {
    None,
    Medical,
    Sports,
    AcademicExcellence,
    FinancialAid,
}

impl SpecialPriority {
    pub const fn multiplier(self) -> f64 {
        match self {
            SpecialPriority::None => 1.0,
            SpecialPriority::Medical => 2.0,
            SpecialPriority::Sports => 1.5,
            SpecialPriority::AcademicExcellence => 1.8,
            SpecialPriority::FinancialAid => 1.3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SpecialPriority::None => "None",
            SpecialPriority::Medical => "Medical",
            SpecialPriority::Sports => "Sports",
            SpecialPriority::AcademicExcellence => "Academic Excellence",
            SpecialPriority::FinancialAid => "Financial Aid",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim() {
            "None" => Some(SpecialPriority::None),
            "Medical" => Some(SpecialPriority::Medical),
            "Sports" => Some(SpecialPriority::Sports),
            "Academic Excellence" => Some(SpecialPriority::AcademicExcellence),
            "Financial Aid" => Some(SpecialPriority::FinancialAid),
            _ => None,
        }
    }
}

/// Room record as seeded from the housing inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub room_type: RoomType,
    pub capacity: u8,
    pub occupied: u8,
    pub floor: u8,
    pub building: String,
}

impl Room {
    pub fn has_vacancy(&self) -> bool {
        self.occupied < self.capacity
    }

    pub fn remaining(&self) -> u8 {
        self.capacity.saturating_sub(self.occupied)
    }
}

/// Intake request as captured from an application form.
///
/// The special-priority field is the raw label so unknown categories can be
/// rejected with a useful error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub name: String,
    pub student_id: String,
    pub gpa: f64,
    pub special_priority: String,
    pub preferences: Vec<RoomId>,
    pub submitted_at: DateTime<Utc>,
}

/// Scored applicant record held by the priority queue.
///
/// `priority_score` is computed once at intake from the immutable inputs
/// (GPA, category, submission time) and never recomputed; `sequence` is the
/// intake order and serves as the deterministic tie-break key between equal
/// scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub name: String,
    pub student_id: StudentId,
    pub gpa: f64,
    pub special_priority: SpecialPriority,
    pub preferences: Vec<RoomId>,
    pub submitted_at: DateTime<Utc>,
    pub priority_score: f64,
    pub sequence: u64,
}

/// Final placement for one applicant in an allocation run.
///
/// Appended to the run's result list in strict extraction order and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    pub applicant: Applicant,
    pub allocated: bool,
    pub allocated_room: Option<RoomId>,
}
