//! Priority-ordered dormitory room allotment.
//!
//! The crate models one admission cycle of a hostel allotment office:
//! applications are validated and scored at intake, held in a binary
//! max-heap keyed on the derived priority score, and drained by a greedy
//! allocation run that honors each applicant's ordered room preferences
//! before falling back to any open room. Rendering, form handling, and
//! record persistence are left to callers; the library exposes queue
//! snapshots and serializable result views for them to present.

pub mod allotment;

pub use allotment::{
    allocate, load_applications, load_applications_from_path, load_rooms, load_rooms_from_path,
    AllocationOutcome, AllocationReport, AllocationRun, AllotmentSystem, Applicant, ApplicantHeap,
    ApplicationForm, IntakeError, InventoryError, OutcomeView, QueueEntryView, Room, RoomId,
    RoomInventory, RoomType, RosterImportError, RunSummary, ScoringConfig, SpecialPriority,
    StudentId,
};
