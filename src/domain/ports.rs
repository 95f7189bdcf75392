use crate::domain::model::RecordStore;
use crate::utils::error::Result;

/// Produces the ordered record store both searches run against.
pub trait RecordSource {
    /// Loads exactly `required` records in read order, or fails without
    /// returning a partial store.
    fn load(&self, required: usize) -> Result<RecordStore>;

    /// Human-readable origin for logs and reports.
    fn describe(&self) -> String;
}
