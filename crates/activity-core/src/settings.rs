use clap::Parser;
use std::path::PathBuf;

use crate::models::ParseMode;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Activity statistics over a tab-delimited activity log
#[derive(Parser, Debug, Clone)]
#[command(
    name = "activity-stats",
    about = "Activity statistics over a tab-delimited activity log",
    version
)]
pub struct Settings {
    /// Activity log to analyse
    pub file: PathBuf,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Skip malformed lines with a warning instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os().collect())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args(args: Vec<std::ffi::OsString>) -> Self {
        let mut settings = Settings::parse_from(args);

        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings
    }

    /// How malformed lines are treated by the reader.
    pub fn parse_mode(&self) -> ParseMode {
        if self.skip_malformed {
            ParseMode::SkipMalformed
        } else {
            ParseMode::Strict
        }
    }

    /// `true` when the report should be printed as JSON.
    pub fn wants_json(&self) -> bool {
        self.format == "json"
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("activity-stats")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let s = Settings::load_from_args(args(&["Activities.txt"]));
        assert_eq!(s.file, PathBuf::from("Activities.txt"));
        assert_eq!(s.format, "text");
        assert_eq!(s.log_level, "INFO");
        assert!(!s.skip_malformed);
        assert!(!s.wants_json());
        assert_eq!(s.parse_mode(), ParseMode::Strict);
    }

    #[test]
    fn test_skip_malformed_maps_to_parse_mode() {
        let s = Settings::load_from_args(args(&["--skip-malformed", "log.txt"]));
        assert_eq!(s.parse_mode(), ParseMode::SkipMalformed);
    }

    #[test]
    fn test_json_format() {
        let s = Settings::load_from_args(args(&["--format", "json", "log.txt"]));
        assert!(s.wants_json());
    }

    #[test]
    fn test_debug_overrides_log_level() {
        let s = Settings::load_from_args(args(&["--log-level", "ERROR", "--debug", "log.txt"]));
        assert_eq!(s.log_level, "DEBUG");
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = Settings::try_parse_from(args(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Settings::try_parse_from(args(&["--format", "xml", "log.txt"]));
        assert!(result.is_err());
    }
}
