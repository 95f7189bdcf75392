use crate::core::binary::uniform_binary_search;
use crate::core::linear::linear_search;
use crate::core::report::SearchReport;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Loads the record store once, then runs both strategies against it.
pub struct SearchEngine<S: RecordSource> {
    source: S,
    monitor: SystemMonitor,
}

impl<S: RecordSource> SearchEngine<S> {
    pub fn new(source: S) -> Self {
        Self::new_with_monitoring(source, false)
    }

    pub fn new_with_monitoring(source: S, monitor_enabled: bool) -> Self {
        Self {
            source,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Load `lines` records and search them for `key`.
    ///
    /// A load failure returns before either search runs.
    pub fn run(&self, lines: usize, key: i32) -> Result<SearchReport> {
        tracing::info!("Loading {} lines from {}", lines, self.source.describe());
        let store = self.source.load(lines)?;
        self.monitor.log_stats("Load");

        let linear = linear_search(store.records(), key);
        tracing::info!(
            "Linear search: {} steps, {} matches",
            linear.steps,
            linear.matches.len()
        );

        // Sorting is preparation, not counted as search steps.
        let sorted = store.sorted_by_serial();
        let binary = uniform_binary_search(&sorted, key);
        tracing::info!(
            "Uniform binary search: {} steps, {} matches",
            binary.steps,
            binary.matches.len()
        );
        self.monitor.log_stats("Search");

        if linear.sorted_matches() != binary.sorted_matches() {
            tracing::warn!("Linear and binary search disagree on matches for key {}", key);
        }

        self.monitor.log_final_stats();
        Ok(SearchReport::new(key, store.len(), linear, binary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RecordStore;
    use crate::utils::error::SearchError;

    struct FixedSource(Vec<i32>);

    impl RecordSource for FixedSource {
        fn load(&self, required: usize) -> Result<RecordStore> {
            if self.0.len() < required {
                return Err(SearchError::InsufficientLinesError {
                    available: self.0.len(),
                    required,
                });
            }
            Ok(self.0[..required]
                .iter()
                .map(|&s| ("12:00", "someone", s))
                .collect())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    #[test]
    fn test_run_compares_both_strategies() {
        let engine = SearchEngine::new(FixedSource(vec![5, 3, 8, 3, 1, 9, 3, 2, 7, 4]));
        let report = engine.run(10, 3).unwrap();

        assert_eq!(report.key, 3);
        assert_eq!(report.lines_processed, 10);
        assert_eq!(report.linear.steps, 10);
        assert_eq!(report.linear.matches, vec![2, 4, 7]);

        let mut binary = report.binary.matches.clone();
        binary.sort_unstable();
        assert_eq!(binary, vec![2, 4, 7]);
    }

    #[test]
    fn test_load_failure_stops_before_search() {
        let engine = SearchEngine::new(FixedSource(vec![1, 2, 3]));
        let err = engine.run(10, 1).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InsufficientLinesError {
                available: 3,
                required: 10
            }
        ));
    }
}
