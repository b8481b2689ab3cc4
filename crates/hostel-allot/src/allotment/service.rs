//! System facade owning the persistent queue and the room inventory.

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{Applicant, ApplicationForm, SpecialPriority, StudentId};
use super::engine::{allocate, AllocationRun};
use super::inventory::RoomInventory;
use super::queue::ApplicantHeap;
use super::report::{AllocationReport, QueueEntryView};
use super::scoring::{priority_score, IntakeError, ScoringConfig};

/// One admission cycle: scoring config, the persistent applicant heap, and
/// the room inventory, owned together with no ambient global state.
#[derive(Debug, Clone)]
pub struct AllotmentSystem {
    config: ScoringConfig,
    queue: ApplicantHeap,
    inventory: RoomInventory,
    next_sequence: u64,
}

impl AllotmentSystem {
    pub fn new(config: ScoringConfig, inventory: RoomInventory) -> Self {
        Self {
            config,
            queue: ApplicantHeap::new(),
            inventory,
            next_sequence: 0,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn inventory(&self) -> &RoomInventory {
        &self.inventory
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn peek(&self) -> Option<&Applicant> {
        self.queue.peek()
    }

    /// Heap-order snapshot for display; callers sort if they need ranking.
    pub fn queue_snapshot(&self) -> Vec<Applicant> {
        self.queue.snapshot()
    }

    pub fn queue_views(&self) -> Vec<QueueEntryView> {
        self.queue.iter().map(QueueEntryView::from).collect()
    }

    /// Validates a form, scores it against `now`, and enqueues the
    /// applicant. Rejected submissions leave the queue untouched.
    pub fn submit(
        &mut self,
        form: ApplicationForm,
        now: DateTime<Utc>,
    ) -> Result<Applicant, IntakeError> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(IntakeError::MissingName);
        }
        let student_id = form.student_id.trim();
        if student_id.is_empty() {
            return Err(IntakeError::MissingStudentId);
        }
        if form.preferences.len() > self.config.max_preferences {
            return Err(IntakeError::TooManyPreferences {
                max: self.config.max_preferences,
                got: form.preferences.len(),
            });
        }
        let special_priority = SpecialPriority::from_label(&form.special_priority)
            .ok_or_else(|| IntakeError::UnknownCategory(form.special_priority.clone()))?;

        let score = priority_score(
            form.gpa,
            special_priority,
            form.submitted_at,
            now,
            &self.config,
        )?;

        let applicant = Applicant {
            name: name.to_string(),
            student_id: StudentId(student_id.to_string()),
            gpa: form.gpa,
            special_priority,
            preferences: form.preferences,
            submitted_at: form.submitted_at,
            priority_score: score,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.queue.insert(applicant.clone());
        Ok(applicant)
    }

    /// Runs a complete allocation pass over a copy of the queue. The
    /// persistent queue is left intact; only room occupancy changes.
    pub fn run_allocation(&mut self) -> AllocationReport {
        let report = allocate(&self.queue, &mut self.inventory);
        let summary = report.summary();
        info!(
            total = summary.total,
            allocated = summary.allocated,
            waitlisted = summary.waitlisted,
            success_pct = summary.success_pct,
            "allocation run complete"
        );
        report
    }

    /// Starts a pull-based run for callers that want to observe progress
    /// between applicants. The run borrows the inventory mutably until
    /// dropped; abandoning it keeps whatever was already occupied.
    pub fn begin_allocation(&mut self) -> AllocationRun<'_> {
        AllocationRun::new(&self.queue, &mut self.inventory)
    }

    /// Bulk occupancy reset; see `RoomInventory::reset_occupancy`.
    pub fn reset_occupancy(&mut self, randomize: bool) {
        self.inventory.reset_occupancy(randomize);
    }
}
