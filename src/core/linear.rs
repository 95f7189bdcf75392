use crate::domain::model::{Record, SearchOutcome};

/// Exhaustive scan: one step per record, no early exit.
///
/// Matches are returned in visitation order, which is the order of `records`.
pub fn linear_search(records: &[Record], key: i32) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();

    for record in records {
        outcome.steps += 1;
        if record.serial_number == key {
            outcome.matches.push(record.original_position);
        }
    }

    tracing::debug!(
        key,
        steps = outcome.steps,
        matches = outcome.matches.len(),
        "linear search finished"
    );
    outcome
}
