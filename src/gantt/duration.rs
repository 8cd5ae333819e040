//! Duration descriptor parsing.
//!
//! Planners describe scene length in free text such as
//! `"Morning (4 hours)"` or `"Full Day (8 hours)"`. The first integer
//! that directly follows an opening parenthesis is taken as whole
//! hours. Anything else falls back to [`DEFAULT_DURATION_HOURS`].
//!
//! Ranges (`"(2-4 hours)"`) read as their first number and fractions
//! (`"(1.5 hours)"`) as their integer part. Only ASCII digits count.
//! Counts beyond `u32::MAX` saturate, so they still overflow any window.

use regex::Regex;
use std::sync::LazyLock;

/// Hours assumed when a descriptor carries no parenthesized integer.
pub const DEFAULT_DURATION_HOURS: u32 = 2;

static DURATION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\(([0-9]+)").ok());

/// Extracts the parenthesized hour count, if any.
///
/// Returns `None` when no `(` is immediately followed by digits.
pub fn try_parse_duration(estimated_time: &str) -> Option<u32> {
    DURATION_RE
        .as_ref()?
        .captures(estimated_time)
        .and_then(|c| c.get(1))
        // The capture is non-empty ASCII digits, so parsing only fails on overflow.
        .map(|m| m.as_str().parse().unwrap_or(u32::MAX))
}

/// Parses a duration descriptor into whole hours.
///
/// Never fails: unparseable text yields [`DEFAULT_DURATION_HOURS`].
///
/// # Example
///
/// ```
/// use u_gantt::gantt::parse_duration;
///
/// assert_eq!(parse_duration("Full Day (8 hours)"), 8);
/// assert_eq!(parse_duration("Afternoon"), 2);
/// ```
pub fn parse_duration(estimated_time: &str) -> u32 {
    try_parse_duration(estimated_time).unwrap_or(DEFAULT_DURATION_HOURS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesized_hours() {
        assert_eq!(parse_duration("Morning (4 hours)"), 4);
        assert_eq!(parse_duration("Full Day (8 hours)"), 8);
        assert_eq!(parse_duration("(7 hours)"), 7);
        assert_eq!(parse_duration("(12)"), 12);
    }

    #[test]
    fn test_default_when_missing() {
        assert_eq!(parse_duration("Afternoon"), DEFAULT_DURATION_HOURS);
        assert_eq!(parse_duration(""), DEFAULT_DURATION_HOURS);
        assert_eq!(parse_duration("4 hours"), DEFAULT_DURATION_HOURS);
        assert_eq!(try_parse_duration("Afternoon"), None);
    }

    #[test]
    fn test_digit_must_follow_paren() {
        // Space between "(" and the digits does not match.
        assert_eq!(parse_duration("Morning ( 4 hours)"), DEFAULT_DURATION_HOURS);
        assert_eq!(parse_duration("Evening (approx. 3 hours)"), DEFAULT_DURATION_HOURS);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(parse_duration("Split (3 hours) then (5 hours)"), 3);
        assert_eq!(parse_duration("Morning (2-4 hours)"), 2);
        assert_eq!(parse_duration("Short (1.5 hours)"), 1);
    }

    #[test]
    fn test_zero_and_overflowing_values() {
        assert_eq!(try_parse_duration("(0 hours)"), Some(0));
        assert_eq!(try_parse_duration("(99999999999 hours)"), Some(u32::MAX));
        assert_eq!(parse_duration("(99999999999 hours)"), u32::MAX);
    }

    #[test]
    fn test_only_ascii_digits() {
        assert_eq!(parse_duration("Block (\u{664} hrs) then (3 hours)"), 3);
        assert_eq!(parse_duration("(\u{664} hrs)"), DEFAULT_DURATION_HOURS);
    }
}
