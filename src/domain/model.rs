use serde::Serialize;
use std::ops::Deref;

/// One data line: `<time>\t<name>\t<serial number>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub time: String,
    pub name: String,
    pub serial_number: i32,
    /// 1-based line number in the source, assigned at load time.
    pub original_position: usize,
}

/// Records in read order. Positions are always `1..=len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record and returns the original position it was given.
    pub fn push(
        &mut self,
        time: impl Into<String>,
        name: impl Into<String>,
        serial_number: i32,
    ) -> usize {
        let original_position = self.records.len() + 1;
        self.records.push(Record {
            time: time.into(),
            name: name.into(),
            serial_number,
            original_position,
        });
        original_position
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy ordered ascending by serial number; `self` keeps its read order.
    pub fn sorted_by_serial(&self) -> SortedRecords {
        SortedRecords::from_unsorted(self.records.clone())
    }
}

impl<T: Into<String>, U: Into<String>> FromIterator<(T, U, i32)> for RecordStore {
    fn from_iter<I: IntoIterator<Item = (T, U, i32)>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for (time, name, serial) in iter {
            store.push(time, name, serial);
        }
        store
    }
}

/// Records ordered ascending by serial number. Equal serials are contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedRecords {
    records: Vec<Record>,
}

impl SortedRecords {
    pub fn from_unsorted(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.serial_number);
        Self { records }
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
}

impl Deref for SortedRecords {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        &self.records
    }
}

/// Result of one search strategy: work done and matched original positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub steps: usize,
    pub matches: Vec<usize>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matches in ascending position order, for order-insensitive comparison.
    pub fn sorted_matches(&self) -> Vec<usize> {
        let mut matches = self.matches.clone();
        matches.sort_unstable();
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_sequential_positions() {
        let mut store = RecordStore::new();
        assert_eq!(store.push("06.10.2016", "Lopez, Anthony", 42), 1);
        assert_eq!(store.push("07.10.2016", "Kim, Ada", 7), 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].original_position, 2);
    }

    #[test]
    fn test_sorted_copy_leaves_store_untouched() {
        let store: RecordStore = [("t", "a", 5), ("t", "b", 3), ("t", "c", 8), ("t", "d", 3)]
            .into_iter()
            .collect();
        let sorted = store.sorted_by_serial();

        let serials: Vec<i32> = sorted.iter().map(|r| r.serial_number).collect();
        assert_eq!(serials, vec![3, 3, 5, 8]);

        let positions: Vec<usize> = store.records().iter().map(|r| r.original_position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sorted_matches() {
        let outcome = SearchOutcome {
            steps: 4,
            matches: vec![4, 2, 8],
        };
        assert_eq!(outcome.sorted_matches(), vec![2, 4, 8]);
        assert!(!outcome.is_empty());
    }
}
