//! Report rendering.
//!
//! We keep formatting code in one place so:
//! - the ingest code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{Prefecture, Record};

/// The prefecture whose rows are kept in the daily report.
///
/// The renderer filters by prefecture only; the `Calendar` begin date and
/// week start are not consulted yet.
pub const TARGET_PREFECTURE: Prefecture = Prefecture::Tokyo;

/// Render one `<date> <infected>` line per record matching
/// [`TARGET_PREFECTURE`], preserving input order.
///
/// No header line, no trailing summary. Returns an empty string when nothing
/// matches.
pub fn format_daily_counts(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        if record.prefecture != TARGET_PREFECTURE {
            continue;
        }
        out.push_str(&format!("{} {}\n", record.date, record.infected));
    }
    out
}
