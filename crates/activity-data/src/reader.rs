//! Activity log loading.
//!
//! Reads a tab-delimited activity log line by line and converts each line
//! into a [`MonitoredData`] record for downstream aggregation.

use std::io::BufRead;
use std::path::Path;

use activity_core::error::{ActivityError, Result};
use activity_core::models::{MonitoredData, ParseMode};
use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, warn};

/// Minimum number of tab-separated fields a line must split into.
const REQUIRED_FIELDS: usize = 5;

const START_FIELD: usize = 0;
const END_FIELD: usize = 2;
const LABEL_FIELD: usize = 4;

const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const TIMESTAMP_LEN: usize = 19;

// ── Public API ────────────────────────────────────────────────────────────────

/// Records parsed from one activity log, plus how many lines were dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<MonitoredData>,
    /// Malformed lines skipped under [`ParseMode::SkipMalformed`].
    pub skipped: usize,
}

/// Parse one tab-delimited line into a [`MonitoredData`].
///
/// Field 0 is the start timestamp, field 2 the end timestamp and field 4 the
/// activity label; fields 1, 3 and anything after 4 are ignored. Errors
/// report line `0`; callers that know the position use
/// [`ActivityError::at_line`].
pub fn parse_line(line: &str) -> Result<MonitoredData> {
    let tokens: Vec<&str> = line.split('\t').collect();
    if tokens.len() < REQUIRED_FIELDS {
        return Err(ActivityError::FieldCount {
            line: 0,
            found: tokens.len(),
        });
    }

    let start_time = parse_timestamp(tokens[START_FIELD], "start time")?;
    let end_time = parse_timestamp(tokens[END_FIELD], "end time")?;

    let label = tokens[LABEL_FIELD];
    if label.is_empty() {
        return Err(ActivityError::EmptyLabel { line: 0 });
    }

    Ok(MonitoredData::new(start_time, end_time, label))
}

/// Read every line of `path` into memory.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).map_err(|source| ActivityError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    std::io::BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|source| ActivityError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Read and parse the activity log at `path`.
///
/// In [`ParseMode::Strict`] the first malformed line aborts loading and its
/// error is returned. In [`ParseMode::SkipMalformed`] the line is logged and
/// counted in [`LoadedRecords::skipped`].
pub fn load_records(path: &Path, mode: ParseMode) -> Result<LoadedRecords> {
    let lines = read_lines(path)?;
    let loaded = parse_lines(lines.iter().map(String::as_str), mode)?;

    debug!(
        "File {}: {} lines, {} records, {} skipped",
        path.display(),
        lines.len(),
        loaded.records.len(),
        loaded.skipped,
    );

    Ok(loaded)
}

/// Parse an ordered sequence of raw lines.
///
/// Line numbers in errors and warnings are 1-based positions in `lines`.
pub fn parse_lines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    mode: ParseMode,
) -> Result<LoadedRecords> {
    let mut loaded = LoadedRecords::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        match parse_line(line) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                let e = e.at_line(line_no);
                match mode {
                    ParseMode::Strict => return Err(e),
                    ParseMode::SkipMalformed => {
                        warn!("Skipping malformed line: {}", e);
                        loaded.skipped += 1;
                    }
                }
            }
        }
    }

    Ok(loaded)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse `YYYY-MM-DD HH:MM:SS` by swapping the space for the ISO `T`
/// separator and parsing with second precision.
///
/// chrono accepts unpadded fields, a signed year and leap second `60`; the
/// parsed value must format back to exactly the normalised input.
fn parse_timestamp(text: &str, field: &'static str) -> Result<NaiveDateTime> {
    let invalid = |reason: String| ActivityError::TimestampParse {
        line: 0,
        field,
        value: text.to_string(),
        reason,
    };

    let normalised = text.replace(' ', "T");
    let parsed = NaiveDateTime::parse_from_str(&normalised, ISO_TIMESTAMP_FORMAT)
        .map_err(|e| invalid(e.to_string()))?;

    if normalised.len() != TIMESTAMP_LEN
        || parsed.nanosecond() >= 1_000_000_000
        || parsed.format(ISO_TIMESTAMP_FORMAT).to_string() != normalised
    {
        return Err(invalid("expected YYYY-MM-DD HH:MM:SS".to_string()));
    }

    Ok(parsed)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
