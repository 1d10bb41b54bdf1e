//! Data layer for activity statistics.
//!
//! Responsible for reading and parsing tab-delimited activity logs,
//! aggregating the parsed records and running the top-level analysis
//! pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;
