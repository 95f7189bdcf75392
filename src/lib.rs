pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::TsvFileSource;
pub use config::{console::Console, toml_config::TomlConfig, SearchSettings};
pub use core::binary::uniform_binary_search;
pub use core::engine::SearchEngine;
pub use core::linear::linear_search;
pub use core::report::{ReportFormat, SearchReport};
pub use domain::model::{Record, RecordStore, SearchOutcome, SortedRecords};
pub use utils::error::{Result, SearchError};
