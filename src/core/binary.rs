use crate::domain::model::{Record, SearchOutcome, SortedRecords};
use std::cmp::Ordering;

/// Where the binary phase stopped and what it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorSearch {
    /// Index into the sorted slice of the first equal key hit, if any.
    pub index: Option<usize>,
    pub steps: usize,
}

/// Binary search followed by expansion over the run of equal keys.
///
/// Matches come back as: the anchor, then its left neighbours nearest
/// first, then its right neighbours nearest first. The step count is the
/// binary-phase comparisons plus one per neighbour collected.
pub fn uniform_binary_search(sorted: &SortedRecords, key: i32) -> SearchOutcome {
    let records = sorted.as_slice();
    let located = locate_anchor(records, key);

    let outcome = match located.index {
        Some(anchor) => {
            let mut outcome = expand_run(records, anchor, key);
            outcome.steps += located.steps;
            outcome
        }
        None => SearchOutcome {
            steps: located.steps,
            matches: Vec::new(),
        },
    };

    tracing::debug!(
        key,
        anchor_steps = located.steps,
        steps = outcome.steps,
        matches = outcome.matches.len(),
        "binary search finished"
    );
    outcome
}

/// Binary phase. Stops at the first midpoint whose key equals `key`.
///
/// Bounds are kept half-open so they never underflow; the midpoint is the
/// same one an inclusive `left + (right - left) / 2` would pick.
pub fn locate_anchor(records: &[Record], key: i32) -> AnchorSearch {
    let mut left = 0;
    let mut right = records.len();
    let mut steps = 0;

    while left < right {
        steps += 1;
        let mid = left + (right - 1 - left) / 2;

        match records[mid].serial_number.cmp(&key) {
            Ordering::Equal => {
                return AnchorSearch {
                    index: Some(mid),
                    steps,
                }
            }
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }

    AnchorSearch { index: None, steps }
}

/// Expansion phase. Walks outward from `anchor` while the key still matches,
/// counting one step per neighbour collected.
pub fn expand_run(records: &[Record], anchor: usize, key: i32) -> SearchOutcome {
    let mut outcome = SearchOutcome {
        steps: 0,
        matches: vec![records[anchor].original_position],
    };

    let left = records[..anchor]
        .iter()
        .rev()
        .take_while(|r| r.serial_number == key);
    let right = records[anchor + 1..]
        .iter()
        .take_while(|r| r.serial_number == key);

    for record in left.chain(right) {
        outcome.steps += 1;
        outcome.matches.push(record.original_position);
    }

    outcome
}
