//! Advisory validation of schedule suggestions.
//!
//! Layout accepts any well-typed input, so nothing here is required
//! before laying out. These checks surface what the layout will quietly
//! absorb so callers can flag it to the user or ask the planner again.
//! Detects:
//! - Days with no scenes
//! - Scenes without a scene number
//! - The same scene scheduled more than once
//! - Duration text that falls back to the default
//! - Zero-hour scenes
//! - Days booked past the visible window

use crate::config::LayoutConfig;
use crate::gantt::{try_parse_duration, DEFAULT_DURATION_HOURS};
use crate::models::ScheduleSuggestion;
use std::collections::HashMap;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Row index of the offending day.
    pub day_index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A day lists no scenes.
    EmptyDay,
    /// A scene has a blank scene number.
    MissingSceneNumber,
    /// A scene number appears more than once in the schedule.
    DuplicateScene,
    /// Duration text has no parenthesized hour count.
    UnparsedDuration,
    /// Duration text parses to zero hours.
    ZeroDuration,
    /// A day's scenes add up to more than the visible window.
    DayOverbooked,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, day_index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            day_index,
            message: message.into(),
        }
    }
}

/// Validates a schedule against a layout window.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue,
/// in day order.
pub fn validate_suggestions(
    schedule: &[ScheduleSuggestion],
    config: &LayoutConfig,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let window = config.column_count();

    for (day_index, day) in schedule.iter().enumerate() {
        if day.scenes.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDay,
                day_index,
                format!("{} ({}) has no scenes", day.day, day.date),
            ));
            continue;
        }

        let mut booked: u32 = 0;
        for scene in &day.scenes {
            let number = scene.scene_number.trim();
            if number.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingSceneNumber,
                    day_index,
                    format!("Scene at {} on {} has no scene number", scene.location, day.date),
                ));
            } else if let Some(&first_day) = first_seen.get(number) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateScene,
                    day_index,
                    format!("Scene {number} on {} was already scheduled on day {}", day.date, first_day + 1),
                ));
            } else {
                first_seen.insert(number, day_index);
            }

            let hours = match try_parse_duration(&scene.estimated_time) {
                Some(0) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ZeroDuration,
                        day_index,
                        format!("Scene {number} on {} has a zero-hour duration", day.date),
                    ));
                    0
                }
                Some(h) => h,
                None => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnparsedDuration,
                        day_index,
                        format!(
                            "Scene {number} duration '{}' has no hour count; assuming {DEFAULT_DURATION_HOURS}h",
                            scene.estimated_time
                        ),
                    ));
                    DEFAULT_DURATION_HOURS
                }
            };
            booked = booked.saturating_add(hours);
        }

        if booked > window {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayOverbooked,
                day_index,
                format!("{} ({}) books {booked}h into a {window}h window", day.day, day.date),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
