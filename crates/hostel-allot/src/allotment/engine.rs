//! Greedy, priority-ordered allocation over a queue snapshot.

use tracing::debug;

use super::domain::{AllocationOutcome, Applicant, RoomId};
use super::inventory::RoomInventory;
use super::queue::ApplicantHeap;
use super::report::AllocationReport;

/// One allocation pass, pulled one applicant at a time.
///
/// The run owns an ephemeral heap of value copies, so the source queue is
/// untouched by extraction, and borrows the inventory mutably for its
/// lifetime, so nothing else can change occupancy mid-run. Each `next()`
/// yields the outcome for the highest-priority remaining applicant; the
/// caller chooses the pacing. Dropping the iterator abandons the run:
/// rooms already occupied and outcomes already yielded stay as they are,
/// there is no rollback.
pub struct AllocationRun<'a> {
    heap: ApplicantHeap,
    inventory: &'a mut RoomInventory,
}

impl<'a> AllocationRun<'a> {
    pub fn new(queue: &ApplicantHeap, inventory: &'a mut RoomInventory) -> Self {
        let mut heap = ApplicantHeap::new();
        for applicant in queue.iter() {
            heap.insert(applicant.clone());
        }
        Self { heap, inventory }
    }

    /// Applicants not yet processed.
    pub fn remaining(&self) -> usize {
        self.heap.len()
    }

    /// Preferred rooms in order, then the first open room in seed order.
    /// Unavailable rooms are expected signals here, never failures.
    fn place(&mut self, applicant: &Applicant) -> Option<RoomId> {
        for preference in &applicant.preferences {
            if self.inventory.occupy(preference).is_ok() {
                return Some(preference.clone());
            }
        }

        let fallback = self.inventory.first_available().map(|room| room.id.clone());
        match fallback {
            Some(id) if self.inventory.occupy(&id).is_ok() => Some(id),
            _ => None,
        }
    }
}

impl Iterator for AllocationRun<'_> {
    type Item = AllocationOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        let applicant = self.heap.extract_max()?;
        let allocated_room = self.place(&applicant);
        debug!(
            student = %applicant.student_id,
            score = applicant.priority_score,
            room = allocated_room.as_ref().map(|id| id.0.as_str()),
            "processed applicant"
        );
        Some(AllocationOutcome {
            allocated: allocated_room.is_some(),
            allocated_room,
            applicant,
        })
    }
}

/// Drains a full allocation run and collects the report.
///
/// Every applicant in the queue appears in the outcome list exactly once,
/// in strict extraction order (descending score, earlier submissions first
/// among ties), marked allocated or waitlisted. Greedy and single-pass: a
/// taken room is never reconsidered and no applicant is reassigned.
pub fn allocate(queue: &ApplicantHeap, inventory: &mut RoomInventory) -> AllocationReport {
    let outcomes: Vec<AllocationOutcome> = AllocationRun::new(queue, inventory).collect();
    AllocationReport::new(outcomes)
}
