mod bootstrap;

use std::io::Write;

use activity_core::formatting::{format_counts, format_day_row, format_days};
use activity_core::settings::Settings;
use activity_data::analysis::{analyze_file, ActivityReport};
use anyhow::{Context, Result};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Activity Stats v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "File: {}, Format: {}, Mode: {:?}",
        settings.file.display(),
        settings.format,
        settings.parse_mode()
    );

    let report = analyze_file(&settings.file, settings.parse_mode())
        .with_context(|| format!("Failed to analyse {}", settings.file.display()))?;

    if report.metadata.lines_skipped > 0 {
        tracing::warn!("{} malformed lines skipped", report.metadata.lines_skipped);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if settings.wants_json() {
        writeln!(out, "{}", report.to_json_pretty()?)?;
    } else {
        render_text(&mut out, &report)?;
    }

    Ok(())
}

/// Write the plain-text report: span, global counts, then one row per day.
fn render_text(out: &mut impl Write, report: &ActivityReport) -> std::io::Result<()> {
    writeln!(
        out,
        "Monitoring span: {}",
        format_days(report.days_of_monitoring)
    )?;
    writeln!(out, "Activity counts: {}", format_counts(&report.activity_counts))?;
    for (day, counts) in &report.activity_count_per_day {
        writeln!(out, "{}", format_day_row(*day, counts))?;
    }
    Ok(())
}
