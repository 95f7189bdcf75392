// Adapters layer: concrete implementations of domain ports.

pub mod tsv_loader;

pub use tsv_loader::{load_from_reader, parse_serial, TsvFileSource};
