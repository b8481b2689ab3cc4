//! Priority score computation for the applicant queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::SpecialPriority;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Scoring weights applied at intake.
///
/// Defaults reproduce the published allotment policy; overriding them is
/// only expected in tests and what-if tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_priority: f64,
    pub gpa_weight: f64,
    pub max_gpa: f64,
    pub max_preferences: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_priority: 1000.0,
            gpa_weight: 100.0,
            max_gpa: 4.0,
            max_preferences: 3,
        }
    }
}

/// Validation errors raised while turning a form into a scored applicant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("applicant name must not be empty")]
    MissingName,
    #[error("student id must not be empty")]
    MissingStudentId,
    #[error("gpa {gpa} outside the accepted range 0.0..={max}")]
    GpaOutOfRange { gpa: f64, max: f64 },
    #[error("unknown special-priority category '{0}'")]
    UnknownCategory(String),
    #[error("at most {max} room preferences accepted, got {got}")]
    TooManyPreferences { max: usize, got: usize },
}

/// Computes the priority score for one application.
///
/// `base * multiplier + gpa * weight + waiting hours`, rounded to two
/// decimal places. Waiting time is clamped at zero so clock skew between
/// the caller and the submission timestamp can never lower a score. Pure
/// function of its inputs.
pub fn priority_score(
    gpa: f64,
    special_priority: SpecialPriority,
    submitted_at: DateTime<Utc>,
    now: DateTime<Utc>,
    config: &ScoringConfig,
) -> Result<f64, IntakeError> {
    if !gpa.is_finite() || gpa < 0.0 || gpa > config.max_gpa {
        return Err(IntakeError::GpaOutOfRange {
            gpa,
            max: config.max_gpa,
        });
    }

    let raw = config.base_priority * special_priority.multiplier()
        + gpa * config.gpa_weight
        + hours_since(submitted_at, now);
    Ok(round_to_cents(raw))
}

/// Hours the application has been waiting, never negative.
pub(crate) fn hours_since(submitted_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let millis = (now - submitted_at).num_milliseconds().max(0);
    millis as f64 / MILLIS_PER_HOUR
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
