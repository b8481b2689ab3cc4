use crate::config::AppConfig;
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use hostel_allot::{
    load_applications_from_path, load_rooms_from_path, AllocationReport, AllotmentSystem,
    ApplicationForm, Room, RoomId, RoomInventory, RoomType,
};
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each placement as the run progresses instead of only the final table.
    #[arg(long)]
    pub(crate) stepwise: bool,
    /// Randomize starting occupancy instead of using the seeded figures.
    #[arg(long)]
    pub(crate) randomize_occupancy: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AllocateArgs {
    /// Room roster CSV (id,type,capacity,occupied,floor,building)
    #[arg(long)]
    pub(crate) rooms: PathBuf,
    /// Application batch CSV (name,student_id,gpa,special_priority,preferences,submitted_at)
    #[arg(long)]
    pub(crate) applications: PathBuf,
    /// Evaluation instant for wait-time scoring (RFC 3339). Defaults to now.
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) as_of: Option<DateTime<Utc>>,
    /// Emit the summary and outcome rows as JSON instead of the text table.
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|parsed| parsed.with_timezone(&Utc))
}

pub(crate) fn run_batch_allocation(
    config: &AppConfig,
    args: AllocateArgs,
) -> Result<(), AppError> {
    let rooms = load_rooms_from_path(&args.rooms)?;
    let inventory = RoomInventory::new(rooms)?;
    let mut system = AllotmentSystem::new(config.scoring(), inventory);

    let now = args.as_of.unwrap_or_else(Utc::now);
    let mut rejected = 0usize;
    for form in load_applications_from_path(&args.applications)? {
        let student_id = form.student_id.clone();
        if let Err(err) = system.submit(form, now) {
            rejected += 1;
            warn!(student_id = %student_id, error = %err, "application rejected at intake");
        }
    }

    let report = system.run_allocation();
    if args.json {
        let payload = serde_json::json!({
            "summary": report.summary(),
            "rejected": rejected,
            "outcomes": report.outcome_views(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        render_report(&report, rejected);
    }
    Ok(())
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let inventory = RoomInventory::new(seed_rooms())?;
    let mut system = AllotmentSystem::new(config.scoring(), inventory);
    if args.randomize_occupancy {
        system.reset_occupancy(true);
    }

    let now = Utc::now();
    for form in seed_applications(now) {
        system.submit(form, now)?;
    }

    println!("Hostel allotment demo");
    println!(
        "  rooms: {} ({} beds, {} occupied)",
        system.inventory().rooms().len(),
        system.inventory().total_capacity(),
        system.inventory().total_occupied()
    );
    render_queue(&system);

    let report = if args.stepwise {
        let mut outcomes = Vec::new();
        let mut run = system.begin_allocation();
        println!("\nProcessing applications");
        while let Some(outcome) = run.next() {
            println!(
                "  {} processed, {} remaining",
                outcome.applicant.name,
                run.remaining()
            );
            outcomes.push(outcome);
        }
        AllocationReport::new(outcomes)
    } else {
        system.run_allocation()
    };

    render_report(&report, 0);
    Ok(())
}

fn render_queue(system: &AllotmentSystem) {
    let mut ranked = system.queue_snapshot();
    ranked.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.sequence.cmp(&b.sequence))
    });

    println!("\nPriority queue ({} waiting)", ranked.len());
    for (rank, applicant) in ranked.iter().enumerate() {
        println!(
            "  {:>2}. {:<20} {:<10} {:<20} score {:>8.2}",
            rank + 1,
            applicant.name,
            applicant.student_id.0,
            applicant.special_priority.label(),
            applicant.priority_score
        );
    }
}

fn render_report(report: &AllocationReport, rejected: usize) {
    let summary = report.summary();
    println!("\nAllocation results");
    println!("  processed:  {}", summary.total);
    println!("  allocated:  {}", summary.allocated);
    println!("  waitlisted: {}", summary.waitlisted);
    println!("  success:    {}%", summary.success_pct);
    if rejected > 0 {
        println!("  rejected at intake: {rejected}");
    }

    println!();
    for view in report.outcome_views() {
        match view.room {
            Some(room) => println!(
                "  {:<20} {:<10} score {:>8.2}  room {}",
                view.name, view.student_id, view.priority_score, room
            ),
            None => println!(
                "  {:<20} {:<10} score {:>8.2}  waitlisted",
                view.name, view.student_id, view.priority_score
            ),
        }
    }
}

fn room(id: &str, room_type: RoomType, occupied: u8, floor: u8, building: &str) -> Room {
    Room {
        id: RoomId(id.to_string()),
        capacity: room_type.capacity(),
        room_type,
        occupied,
        floor,
        building: building.to_string(),
    }
}

fn seed_rooms() -> Vec<Room> {
    vec![
        room("A101", RoomType::Single, 0, 1, "A"),
        room("A102", RoomType::Double, 0, 1, "A"),
        room("A103", RoomType::Triple, 1, 1, "A"),
        room("A201", RoomType::Single, 1, 2, "A"),
        room("A202", RoomType::Double, 0, 2, "A"),
        room("B101", RoomType::Double, 1, 1, "B"),
        room("B102", RoomType::Triple, 0, 1, "B"),
        room("B201", RoomType::Single, 0, 2, "B"),
        room("B202", RoomType::Double, 2, 2, "B"),
        room("C101", RoomType::Triple, 0, 1, "C"),
        room("C102", RoomType::Single, 0, 1, "C"),
        room("C201", RoomType::Double, 0, 2, "C"),
        room("C202", RoomType::Triple, 2, 2, "C"),
        room("D101", RoomType::Single, 0, 1, "D"),
        room("D102", RoomType::Double, 1, 1, "D"),
        room("D201", RoomType::Triple, 0, 2, "D"),
        room("D202", RoomType::Single, 0, 2, "D"),
        room("E101", RoomType::Double, 0, 1, "E"),
        room("E102", RoomType::Triple, 1, 1, "E"),
        room("E201", RoomType::Single, 0, 2, "E"),
    ]
}

fn application(
    name: &str,
    student_id: &str,
    gpa: f64,
    special_priority: &str,
    preferences: [&str; 3],
    submitted_at: DateTime<Utc>,
) -> ApplicationForm {
    ApplicationForm {
        name: name.to_string(),
        student_id: student_id.to_string(),
        gpa,
        special_priority: special_priority.to_string(),
        preferences: preferences
            .iter()
            .map(|id| RoomId(id.to_string()))
            .collect(),
        submitted_at,
    }
}

fn seed_applications(now: DateTime<Utc>) -> Vec<ApplicationForm> {
    let at = |seconds_ago: i64| now - Duration::seconds(seconds_ago);
    vec![
        application(
            "Alice Green",
            "CS2024001",
            4.0,
            "Academic Excellence",
            ["A101", "B201", "D202"],
            at(100),
        ),
        application(
            "Bob Johnson",
            "CS2024002",
            3.6,
            "None",
            ["A202", "C201", "E101"],
            at(95),
        ),
        application(
            "Maya Patel",
            "CS2024003",
            3.8,
            "Sports",
            ["B102", "C101", "D201"],
            at(90),
        ),
        application(
            "Carlos Rodriguez",
            "CS2024004",
            2.9,
            "Medical",
            ["A101", "B201", "C102"],
            at(85),
        ),
        application(
            "Sophia Kim",
            "CS2024005",
            3.3,
            "Financial Aid",
            ["A103", "B101", "C202"],
            at(80),
        ),
        application(
            "James Wilson",
            "CS2024006",
            3.4,
            "None",
            ["D102", "E102", "A202"],
            at(75),
        ),
        application(
            "Emma Davis",
            "CS2024007",
            3.7,
            "Academic Excellence",
            ["E201", "D202", "B201"],
            at(70),
        ),
        application(
            "Alex Chen",
            "CS2024008",
            3.1,
            "Sports",
            ["C101", "B102", "A202"],
            at(65),
        ),
        application(
            "Isabella Martinez",
            "CS2024009",
            3.5,
            "None",
            ["E101", "C201", "A202"],
            at(60),
        ),
        application(
            "Noah Thompson",
            "CS2024010",
            3.2,
            "Medical",
            ["A101", "C102", "D101"],
            at(55),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_allot::ScoringConfig;

    #[test]
    fn seeded_demo_places_the_whole_batch() {
        let inventory = RoomInventory::new(seed_rooms()).expect("seed roster is valid");
        let mut system = AllotmentSystem::new(ScoringConfig::default(), inventory);

        let now = Utc::now();
        for form in seed_applications(now) {
            system.submit(form, now).expect("seed submission is valid");
        }
        assert_eq!(system.queue_len(), 10);

        let report = system.run_allocation();
        assert_eq!(report.summary().allocated, 10);
        // The medical case with the higher GPA wins the contested single.
        assert_eq!(report.outcomes()[0].applicant.student_id.0, "CS2024010");
        assert_eq!(system.queue_len(), 10);
    }

    #[test]
    fn timestamp_parser_accepts_rfc3339_and_rejects_garbage() {
        let parsed = parse_timestamp("2025-09-01T12:00:00Z").expect("valid timestamp");
        assert_eq!(parsed.to_rfc3339(), "2025-09-01T12:00:00+00:00");
        assert!(parse_timestamp("yesterday").is_err());
    }
}
