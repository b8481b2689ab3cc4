use chrono::Duration;

use super::common::{form, now, system};
use crate::allotment::domain::RoomId;
use crate::allotment::scoring::IntakeError;

#[test]
fn submit_scores_and_enqueues_the_applicant() {
    let mut system = system();
    let applicant = system
        .submit(form("Alice Green", "CS2024001", 4.0, "Academic Excellence", &["A101"]), now())
        .expect("valid submission");

    assert_eq!(applicant.priority_score, 2200.00);
    assert_eq!(applicant.sequence, 0);
    assert_eq!(system.queue_len(), 1);
    assert_eq!(system.peek().expect("queued").student_id.0, "CS2024001");
}

#[test]
fn rejected_submissions_do_not_enqueue() {
    let mut system = system();

    let error = system
        .submit(form("  ", "CS2024001", 3.0, "None", &[]), now())
        .expect_err("blank name");
    assert_eq!(error, IntakeError::MissingName);

    let error = system
        .submit(form("Bob", "", 3.0, "None", &[]), now())
        .expect_err("blank id");
    assert_eq!(error, IntakeError::MissingStudentId);

    let error = system
        .submit(form("Bob", "CS2024002", 4.5, "None", &[]), now())
        .expect_err("gpa out of range");
    assert!(matches!(error, IntakeError::GpaOutOfRange { .. }));

    let error = system
        .submit(form("Bob", "CS2024002", 3.0, "Veteran", &[]), now())
        .expect_err("unknown category");
    assert_eq!(error, IntakeError::UnknownCategory("Veteran".to_string()));

    let error = system
        .submit(
            form("Bob", "CS2024002", 3.0, "None", &["A101", "A102", "A103", "B201"]),
            now(),
        )
        .expect_err("too many preferences");
    assert!(matches!(error, IntakeError::TooManyPreferences { max: 3, got: 4 }));

    assert_eq!(system.queue_len(), 0);
}

#[test]
fn sequence_numbers_increase_per_accepted_submission() {
    let mut system = system();
    let first = system
        .submit(form("A", "S1", 3.0, "None", &[]), now())
        .expect("accepted");
    system
        .submit(form("  ", "S2", 3.0, "None", &[]), now())
        .expect_err("rejected");
    let second = system
        .submit(form("B", "S3", 3.0, "None", &[]), now())
        .expect("accepted");

    assert_eq!(first.sequence, 0);
    assert_eq!(second.sequence, 1);
}

#[test]
fn run_allocation_leaves_the_queue_intact() {
    let mut system = system();
    system
        .submit(form("Alice", "S1", 4.0, "Academic Excellence", &["A101"]), now())
        .expect("accepted");
    system
        .submit(form("Bob", "S2", 3.6, "None", &["A102"]), now())
        .expect("accepted");

    let report = system.run_allocation();
    assert_eq!(report.summary().allocated, 2);
    assert_eq!(system.queue_len(), 2);

    // A second run finds the rooms already occupied from the first.
    let second = system.run_allocation();
    let alice = &second.outcomes()[0];
    assert_ne!(alice.allocated_room, Some(RoomId("A101".to_string())));
}

#[test]
fn submissions_waiting_longer_outrank_newer_equal_forms() {
    let mut system = system();
    let evaluated = now();
    let mut early = form("Early", "S1", 3.0, "None", &[]);
    early.submitted_at = evaluated - Duration::hours(10);
    let late = form("Late", "S2", 3.0, "None", &[]);

    system.submit(late, evaluated).expect("accepted");
    system.submit(early, evaluated).expect("accepted");

    assert_eq!(system.peek().expect("queued").student_id.0, "S1");
}

#[test]
fn queue_views_mirror_the_snapshot() {
    let mut system = system();
    system
        .submit(form("Maya Patel", "CS2024003", 3.8, "Sports", &["A103", "A101"]), now())
        .expect("accepted");

    let views = system.queue_views();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].special_priority, "Sports");
    assert_eq!(views[0].priority_score, 1880.00);
    assert_eq!(views[0].preferences, ["A103", "A101"]);

    let json = serde_json::to_value(&views[0]).expect("serializable");
    assert_eq!(json["student_id"], "CS2024003");
}

#[test]
fn reset_occupancy_prepares_a_fresh_cycle() {
    let mut system = system();
    system
        .submit(form("Alice", "S1", 4.0, "Academic Excellence", &["A101"]), now())
        .expect("accepted");
    system.run_allocation();
    assert!(system.inventory().total_occupied() > 0);

    system.reset_occupancy(false);
    assert_eq!(system.inventory().total_occupied(), 0);
}
