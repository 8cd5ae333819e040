//! Hour and scene labels for the grid header and cells.

use crate::config::LayoutConfig;

/// Formats an hour of day on a 12-hour clock (`8` → `"8 AM"`,
/// `12` → `"12 PM"`, `13` → `"1 PM"`, `0` → `"12 AM"`).
///
/// Total over all inputs: hours are taken modulo 24.
pub fn format_hour_label(hour: u32) -> String {
    let hour = hour % 24;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display} {suffix}")
}

/// Header labels for every visible hour column, left to right.
pub fn hour_labels(config: &LayoutConfig) -> Vec<String> {
    config.hours().map(format_hour_label).collect()
}
