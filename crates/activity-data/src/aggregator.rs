//! Activity aggregation: monitoring span, global counts and per-day counts.

use std::collections::{BTreeMap, BTreeSet};

use activity_core::error::{ActivityError, Result};
use activity_core::models::MonitoredData;

/// Label → occurrence count.
pub type ActivityCounts = BTreeMap<String, u32>;

/// Ordinal start day → label counts for the records that started that day.
pub type DailyActivityCounts = BTreeMap<u32, ActivityCounts>;

// ── ActivityAggregator ────────────────────────────────────────────────────────

/// Stateless helper grouping activity records.
pub struct ActivityAggregator;

impl ActivityAggregator {
    /// Whole days between the earliest start time and the latest end time,
    /// truncated toward zero.
    ///
    /// Returns [`ActivityError::EmptyInput`] when `records` is empty.
    pub fn days_of_monitoring(records: &[MonitoredData]) -> Result<i64> {
        let first_time = records
            .iter()
            .map(MonitoredData::start_time)
            .min()
            .ok_or(ActivityError::EmptyInput)?;
        let last_time = records
            .iter()
            .map(MonitoredData::end_time)
            .max()
            .ok_or(ActivityError::EmptyInput)?;

        Ok((last_time - first_time).num_days())
    }

    /// Number of records per activity label.
    pub fn count_by_activity_type(records: &[MonitoredData]) -> ActivityCounts {
        Self::count_labels(records.iter())
    }

    /// For each day in `days`, the label counts of the records whose start
    /// time falls on that ordinal day.
    ///
    /// Days with no matching record are left out of the result.
    pub fn activity_count_per_day(
        days: &BTreeSet<u32>,
        records: &[MonitoredData],
    ) -> DailyActivityCounts {
        days.iter()
            .filter_map(|&day| {
                let counts = Self::count_labels(records.iter().filter(|r| r.start_day() == day));
                (!counts.is_empty()).then_some((day, counts))
            })
            .collect()
    }

    /// The distinct ordinal days on which at least one record started.
    pub fn distinct_start_days(records: &[MonitoredData]) -> BTreeSet<u32> {
        records.iter().map(MonitoredData::start_day).collect()
    }

    // ── Private ───────────────────────────────────────────────────────────────

    fn count_labels<'a>(records: impl Iterator<Item = &'a MonitoredData>) -> ActivityCounts {
        let mut counts = ActivityCounts::new();
        for record in records {
            *counts
                .entry(record.activity_label().to_string())
                .or_insert(0) += 1;
        }
        counts
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
