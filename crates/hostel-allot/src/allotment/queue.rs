//! Array-backed binary max-heap over scored applicants.
//!
//! Hand-rolled rather than `std::collections::BinaryHeap` because the
//! allotment workflow needs the raw backing-array order for queue
//! snapshots and a tie-break rule (insertion sequence) that would
//! otherwise force a total-order wrapper around a float score.

use super::domain::Applicant;

/// Max-heap keyed on `priority_score`, ties broken by lower `sequence`.
///
/// Invariant between operations: every non-root node is outranked-or-equal
/// by its parent. For a 0-based backing array the parent of `i` is
/// `(i - 1) / 2`, children are `2i + 1` and `2i + 2`.
#[derive(Debug, Clone, Default)]
pub struct ApplicantHeap {
    items: Vec<Applicant>,
}

impl ApplicantHeap {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Highest-priority applicant without removal.
    pub fn peek(&self) -> Option<&Applicant> {
        self.items.first()
    }

    /// Backing-array iteration in heap order, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Applicant> {
        self.items.iter()
    }

    /// Shallow copy of the backing array in heap order.
    ///
    /// Callers that need a ranked listing must sort by `priority_score`
    /// descending themselves.
    pub fn snapshot(&self) -> Vec<Applicant> {
        self.items.clone()
    }

    /// Appends and sifts the new entry up. Amortized O(log n).
    pub fn insert(&mut self, applicant: Applicant) {
        self.items.push(applicant);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the highest-priority applicant, `None` when the
    /// queue is empty. O(log n).
    pub fn extract_max(&mut self) -> Option<Applicant> {
        match self.items.len() {
            0 => None,
            1 => self.items.pop(),
            last => {
                self.items.swap(0, last - 1);
                let max = self.items.pop();
                self.sift_down(0);
                max
            }
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !outranks(&self.items[index], &self.items[parent]) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && outranks(&self.items[left], &self.items[largest]) {
                largest = left;
            }
            if right < len && outranks(&self.items[right], &self.items[largest]) {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.items.swap(index, largest);
            index = largest;
        }
    }
}

/// Strict priority ordering: higher score wins, equal scores fall back to
/// the earlier insertion sequence.
fn outranks(a: &Applicant, b: &Applicant) -> bool {
    a.priority_score > b.priority_score
        || (a.priority_score == b.priority_score && a.sequence < b.sequence)
}
