//! Main analysis pipeline.
//!
//! Loads an activity log, runs every aggregation over the parsed records and
//! returns an [`ActivityReport`] ready for rendering.

use std::path::Path;

use activity_core::error::Result;
use activity_core::models::{MonitoredData, ParseMode};
use serde::Serialize;
use tracing::debug;

use crate::aggregator::{ActivityAggregator, ActivityCounts, DailyActivityCounts};
use crate::reader::load_records;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisMetadata {
    /// Path of the analysed log, or `None` for in-memory input.
    pub source: Option<String>,
    /// Number of records that went into the aggregations.
    pub records_processed: usize,
    /// Malformed lines dropped under [`ParseMode::SkipMalformed`].
    pub lines_skipped: usize,
    /// Wall-clock seconds spent reading and parsing the log.
    pub load_time_seconds: f64,
}

/// The complete output of [`analyze_file`].
#[derive(Debug, Clone, Serialize)]
pub struct ActivityReport {
    /// Whole days between the first start and the last end.
    pub days_of_monitoring: i64,
    /// Occurrences per activity label over the whole log.
    pub activity_counts: ActivityCounts,
    /// Occurrences per label, keyed by the ordinal day the activity started.
    pub activity_count_per_day: DailyActivityCounts,
    pub metadata: AnalysisMetadata,
}

impl ActivityReport {
    /// Serialise the report as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline over the log at `path`.
///
/// 1. Load and parse every line according to `mode`.
/// 2. Compute the monitoring span, global counts and per-day counts.
///
/// Fails when the file cannot be read, when a line is malformed in
/// [`ParseMode::Strict`], or when no records remain to span.
pub fn analyze_file(path: &Path, mode: ParseMode) -> Result<ActivityReport> {
    let load_start = std::time::Instant::now();
    let loaded = load_records(path, mode)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let mut report = analyze_records(&loaded.records)?;
    report.metadata.source = Some(path.display().to_string());
    report.metadata.lines_skipped = loaded.skipped;
    report.metadata.load_time_seconds = load_time;

    Ok(report)
}

/// Aggregate records that are already in memory.
pub fn analyze_records(records: &[MonitoredData]) -> Result<ActivityReport> {
    let days_of_monitoring = ActivityAggregator::days_of_monitoring(records)?;
    let activity_counts = ActivityAggregator::count_by_activity_type(records);

    // An activity belongs to the day it started on.
    let days = ActivityAggregator::distinct_start_days(records);
    let activity_count_per_day = ActivityAggregator::activity_count_per_day(&days, records);

    debug!(
        "Aggregated {} records: {} labels over {} days",
        records.len(),
        activity_counts.len(),
        activity_count_per_day.len()
    );

    Ok(ActivityReport {
        days_of_monitoring,
        activity_counts,
        activity_count_per_day,
        metadata: AnalysisMetadata {
            records_processed: records.len(),
            ..AnalysisMetadata::default()
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
