use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the activity log, with a space between date and
/// time.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How the reader reacts to a line that cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Abort the whole run on the first malformed line.
    #[default]
    Strict,
    /// Log a warning, drop the line, and keep reading.
    SkipMalformed,
}

/// One observed activity occurrence read from the activity log.
///
/// Built once per input line and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredData {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    activity_label: String,
}

impl MonitoredData {
    /// Create a record. `end_time >= start_time` is not checked.
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        activity_label: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            activity_label: activity_label.into(),
        }
    }

    /// Inclusive start of the activity.
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Inclusive end of the activity.
    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    /// Activity type, compared by exact string match.
    pub fn activity_label(&self) -> &str {
        &self.activity_label
    }

    /// Ordinal day-of-year (1..=366) on which the activity started.
    ///
    /// The year is ignored, so the same ordinal in two different years
    /// maps to the same day.
    pub fn start_day(&self) -> u32 {
        self.start_time.ordinal()
    }

    /// Render the record back into the five-field tab-separated log format.
    ///
    /// The two unused columns are left empty.
    pub fn to_line(&self) -> String {
        format!(
            "{}\t\t{}\t\t{}",
            self.start_time.format(LOG_TIMESTAMP_FORMAT),
            self.end_time.format(LOG_TIMESTAMP_FORMAT),
            self.activity_label
        )
    }
}

impl fmt::Display for MonitoredData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MonitoredData{{startTime={}, endTime={}, activityLabel='{}'}}",
            self.start_time.format("%Y-%m-%dT%H:%M:%S"),
            self.end_time.format("%Y-%m-%dT%H:%M:%S"),
            self.activity_label
        )
    }
}
