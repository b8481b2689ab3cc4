use proptest::prelude::*;

use super::common::{assert_heap_shape, scored};
use crate::allotment::queue::ApplicantHeap;

#[test]
fn extract_on_empty_queue_is_none() {
    let mut heap = ApplicantHeap::new();
    assert!(heap.extract_max().is_none());
    assert!(heap.peek().is_none());
    assert_eq!(heap.len(), 0);
}

#[test]
fn single_element_round_trip() {
    let mut heap = ApplicantHeap::new();
    heap.insert(scored("s1", 1500.0, 0));
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.peek().expect("peek").priority_score, 1500.0);

    let max = heap.extract_max().expect("one element");
    assert_eq!(max.student_id.0, "s1");
    assert!(heap.is_empty());
}

#[test]
fn extraction_follows_score_order() {
    let mut heap = ApplicantHeap::new();
    heap.insert(scored("b", 1360.0, 0));
    heap.insert(scored("a", 2200.0, 1));

    assert_eq!(heap.extract_max().expect("first").student_id.0, "a");
    assert_eq!(heap.extract_max().expect("second").student_id.0, "b");
    assert!(heap.extract_max().is_none());
}

#[test]
fn equal_scores_break_ties_by_insertion_sequence() {
    let mut heap = ApplicantHeap::new();
    heap.insert(scored("late", 1500.0, 7));
    heap.insert(scored("early", 1500.0, 2));
    heap.insert(scored("middle", 1500.0, 4));

    assert_eq!(heap.extract_max().expect("first").student_id.0, "early");
    assert_eq!(heap.extract_max().expect("second").student_id.0, "middle");
    assert_eq!(heap.extract_max().expect("third").student_id.0, "late");
}

#[test]
fn snapshot_is_heap_order_and_idempotent() {
    let mut heap = ApplicantHeap::new();
    for (index, score) in [1200.0, 2400.0, 1800.0, 2100.0].into_iter().enumerate() {
        heap.insert(scored(&format!("s{index}"), score, index as u64));
    }

    let first = heap.snapshot();
    let second = heap.snapshot();
    assert_eq!(first, second);
    assert_eq!(first.len(), heap.len());
    assert_heap_shape(&first);

    // Snapshot is the backing array, so the root leads but the rest is
    // heap order, not a ranked listing.
    assert_eq!(first[0].priority_score, 2400.0);
}

#[test]
fn peek_matches_next_extraction() {
    let mut heap = ApplicantHeap::new();
    heap.insert(scored("low", 900.0, 0));
    heap.insert(scored("high", 1900.0, 1));

    let peeked = heap.peek().expect("peek").student_id.clone();
    let extracted = heap.extract_max().expect("extract").student_id;
    assert_eq!(peeked, extracted);
}

proptest! {
    #[test]
    fn heap_shape_holds_after_every_insert(scores in prop::collection::vec(0u32..500_000, 0..64)) {
        let mut heap = ApplicantHeap::new();
        for (sequence, score) in scores.iter().enumerate() {
            heap.insert(scored(
                &format!("s{sequence}"),
                f64::from(*score) / 100.0,
                sequence as u64,
            ));
            assert_heap_shape(&heap.snapshot());
        }
    }

    #[test]
    fn extraction_order_is_non_increasing(scores in prop::collection::vec(0u32..500_000, 1..64)) {
        let mut heap = ApplicantHeap::new();
        for (sequence, score) in scores.iter().enumerate() {
            heap.insert(scored(
                &format!("s{sequence}"),
                f64::from(*score) / 100.0,
                sequence as u64,
            ));
        }

        let mut drained = Vec::with_capacity(scores.len());
        while let Some(applicant) = heap.extract_max() {
            assert_heap_shape(&heap.snapshot());
            drained.push(applicant.priority_score);
        }

        prop_assert_eq!(drained.len(), scores.len());
        for window in drained.windows(2) {
            prop_assert!(window[0] >= window[1]);
        }
    }
}
