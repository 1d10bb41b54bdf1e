use std::collections::BTreeMap;

/// Format a label → count table as `{Label=count, ...}`, in key order.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use activity_core::formatting::format_counts;
///
/// let mut counts = BTreeMap::new();
/// counts.insert("Toileting".to_string(), 1);
/// counts.insert("Sleeping".to_string(), 2);
/// assert_eq!(format_counts(&counts), "{Sleeping=2, Toileting=1}");
/// assert_eq!(format_counts(&BTreeMap::new()), "{}");
/// ```
pub fn format_counts(counts: &BTreeMap<String, u32>) -> String {
    let body = counts
        .iter()
        .map(|(label, count)| format!("{}={}", label, count))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

/// Format a whole-day span, pluralising the unit.
///
/// # Examples
///
/// ```
/// use activity_core::formatting::format_days;
///
/// assert_eq!(format_days(0), "0 days");
/// assert_eq!(format_days(1), "1 day");
/// assert_eq!(format_days(13), "13 days");
/// ```
pub fn format_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Format one row of the per-day table: `Day 332: {Sleeping=1}`.
pub fn format_day_row(day: u32, counts: &BTreeMap<String, u32>) -> String {
    format!("Day {}: {}", day, format_counts(counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
        pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect()
    }

    #[test]
    fn test_format_counts_single() {
        assert_eq!(format_counts(&counts(&[("Sleeping", 1)])), "{Sleeping=1}");
    }

    #[test]
    fn test_format_counts_keeps_label_verbatim() {
        // Labels are matched exactly, so whitespace and case survive.
        assert_eq!(
            format_counts(&counts(&[("Spare_Time/TV", 3), ("sleeping ", 1)])),
            "{Spare_Time/TV=3, sleeping =1}"
        );
    }

    #[test]
    fn test_format_days_negative() {
        assert_eq!(format_days(-2), "-2 days");
    }

    #[test]
    fn test_format_day_row() {
        let row = format_day_row(332, &counts(&[("Sleeping", 1), ("Toileting", 1)]));
        assert_eq!(row, "Day 332: {Sleeping=1, Toileting=1}");
    }
}
