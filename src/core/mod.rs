pub mod binary;
pub mod engine;
pub mod linear;
pub mod report;

pub use crate::domain::model::{Record, RecordStore, SearchOutcome, SortedRecords};
pub use crate::domain::ports::RecordSource;
pub use crate::utils::error::Result;
