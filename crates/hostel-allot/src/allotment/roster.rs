//! CSV loaders for the two seeds the engine consumes: room inventories
//! and application batches.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::domain::{ApplicationForm, Room, RoomId, RoomType};

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown room type '{value}' for room '{room}'")]
    UnknownRoomType { room: String, value: String },
    #[error("invalid submission timestamp '{value}' for student '{student}': {source}")]
    InvalidTimestamp {
        student: String,
        value: String,
        source: chrono::ParseError,
    },
}

/// Loads a room inventory seed (`id,type,capacity,occupied,floor,building`)
/// preserving file order. A missing capacity column falls back to the
/// capacity implied by the room type.
pub fn load_rooms<R: Read>(reader: R) -> Result<Vec<Room>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rooms = Vec::new();

    for record in csv_reader.deserialize::<RoomRow>() {
        let row = record?;
        let room_type =
            RoomType::from_label(&row.room_type).ok_or_else(|| RosterImportError::UnknownRoomType {
                room: row.id.clone(),
                value: row.room_type.clone(),
            })?;

        rooms.push(Room {
            id: RoomId(row.id),
            room_type,
            capacity: row.capacity.unwrap_or_else(|| room_type.capacity()),
            occupied: row.occupied,
            floor: row.floor,
            building: row.building,
        });
    }

    Ok(rooms)
}

pub fn load_rooms_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Room>, RosterImportError> {
    let file = std::fs::File::open(path)?;
    load_rooms(file)
}

/// Loads an application batch
/// (`name,student_id,gpa,special_priority,preferences,submitted_at`).
///
/// Preferences are pipe-separated room ids, timestamps RFC 3339. Rows come
/// back as unvalidated forms; category and GPA checks happen at intake.
pub fn load_applications<R: Read>(reader: R) -> Result<Vec<ApplicationForm>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut forms = Vec::new();

    for record in csv_reader.deserialize::<ApplicationRow>() {
        let row = record?;
        let submitted_at = DateTime::parse_from_rfc3339(row.submitted_at.trim())
            .map_err(|source| RosterImportError::InvalidTimestamp {
                student: row.student_id.clone(),
                value: row.submitted_at.clone(),
                source,
            })?
            .with_timezone(&Utc);

        forms.push(ApplicationForm {
            name: row.name,
            student_id: row.student_id,
            gpa: row.gpa,
            special_priority: row.special_priority,
            preferences: split_preferences(&row.preferences),
            submitted_at,
        });
    }

    Ok(forms)
}

pub fn load_applications_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ApplicationForm>, RosterImportError> {
    let file = std::fs::File::open(path)?;
    load_applications(file)
}

fn split_preferences(raw: &str) -> Vec<RoomId> {
    raw.split('|')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| RoomId(id.to_string()))
        .collect()
}

#[derive(Debug, Deserialize)]
struct RoomRow {
    id: String,
    #[serde(rename = "type")]
    room_type: String,
    #[serde(default)]
    capacity: Option<u8>,
    #[serde(default)]
    occupied: u8,
    #[serde(default)]
    floor: u8,
    #[serde(default)]
    building: String,
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    name: String,
    student_id: String,
    gpa: f64,
    special_priority: String,
    #[serde(default)]
    preferences: String,
    submitted_at: String,
}
