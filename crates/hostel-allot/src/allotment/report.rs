//! Run results and the serializable views callers present.

use serde::Serialize;

use super::domain::{AllocationOutcome, Applicant};

/// Ordered outcome list for one completed allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationReport {
    outcomes: Vec<AllocationOutcome>,
}

impl AllocationReport {
    pub fn new(outcomes: Vec<AllocationOutcome>) -> Self {
        Self { outcomes }
    }

    /// Outcomes in strict extraction order.
    pub fn outcomes(&self) -> &[AllocationOutcome] {
        &self.outcomes
    }

    pub fn summary(&self) -> RunSummary {
        let total = self.outcomes.len();
        let allocated = self
            .outcomes
            .iter()
            .filter(|outcome| outcome.allocated)
            .count();
        RunSummary {
            total,
            allocated,
            waitlisted: total - allocated,
            success_pct: success_percentage(allocated, total),
        }
    }

    pub fn outcome_views(&self) -> Vec<OutcomeView> {
        self.outcomes.iter().map(OutcomeView::from).collect()
    }
}

/// Counters summarizing a run for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub allocated: usize,
    pub waitlisted: usize,
    /// `round(allocated / total * 100)`; reported as 0 for an empty run.
    pub success_pct: u8,
}

fn success_percentage(allocated: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (allocated as f64 / total as f64 * 100.0).round() as u8
}

/// Presentation row for one allocation outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeView {
    pub name: String,
    pub student_id: String,
    pub gpa: f64,
    pub priority_score: f64,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl From<&AllocationOutcome> for OutcomeView {
    fn from(outcome: &AllocationOutcome) -> Self {
        Self {
            name: outcome.applicant.name.clone(),
            student_id: outcome.applicant.student_id.0.clone(),
            gpa: outcome.applicant.gpa,
            priority_score: outcome.applicant.priority_score,
            status: if outcome.allocated {
                "allocated"
            } else {
                "waitlisted"
            },
            room: outcome.allocated_room.as_ref().map(|id| id.0.clone()),
        }
    }
}

/// Presentation row for a queued application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueEntryView {
    pub name: String,
    pub student_id: String,
    pub gpa: f64,
    pub special_priority: &'static str,
    pub priority_score: f64,
    pub preferences: Vec<String>,
}

impl From<&Applicant> for QueueEntryView {
    fn from(applicant: &Applicant) -> Self {
        Self {
            name: applicant.name.clone(),
            student_id: applicant.student_id.0.clone(),
            gpa: applicant.gpa,
            special_priority: applicant.special_priority.label(),
            priority_score: applicant.priority_score,
            preferences: applicant
                .preferences
                .iter()
                .map(|id| id.0.clone())
                .collect(),
        }
    }
}
