//! Display formatting for query results
//!
//! Pure presentation helpers: they format copies of values and never touch
//! the stored records. The height format is a user-visible contract and must
//! stay byte-for-byte stable.

use crate::models::BuildingRecord;
use std::fmt::Write;

/// Format a height to at most 2 decimal places with trailing zeros stripped
///
/// `300.00` becomes `"300"`, `300.50` becomes `"300.5"`, `300.25` stays
/// `"300.25"`.
pub fn format_height(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Render records as a Name / Height / Completion Year text table
///
/// Heights go through [`format_height`] and years through
/// [`BuildingRecord::display_year`], matching the dashboard's display frame.
pub fn building_table(records: &[&BuildingRecord]) -> String {
    let name_width = records
        .iter()
        .map(|record| record.name.len())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:>10}  {:>15}",
        "Name", "Height", "Completion Year"
    );

    for record in records {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>10}  {:>15}",
            record.name,
            format_height(record.height),
            record.display_year()
        );
    }

    out
}
