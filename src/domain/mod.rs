// Domain layer: records, search results and the loading port. No I/O here.

pub mod model;
pub mod ports;
