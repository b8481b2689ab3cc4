//! Application intake, priority queueing, and room allocation.

pub mod domain;
pub mod engine;
pub mod inventory;
pub mod queue;
pub mod report;
pub mod roster;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AllocationOutcome, Applicant, ApplicationForm, Room, RoomId, RoomType, SpecialPriority,
    StudentId,
};
pub use engine::{allocate, AllocationRun};
pub use inventory::{InventoryError, RoomInventory};
pub use queue::ApplicantHeap;
pub use report::{AllocationReport, OutcomeView, QueueEntryView, RunSummary};
pub use roster::{
    load_applications, load_applications_from_path, load_rooms, load_rooms_from_path,
    RosterImportError,
};
pub use scoring::{priority_score, IntakeError, ScoringConfig};
pub use service::AllotmentSystem;
