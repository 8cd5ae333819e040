//! Gantt layout engine.
//!
//! Turns a loosely-structured schedule suggestion into a day-by-hour
//! grid: one row per shoot day, one column per visible hour, scenes
//! placed left to right as spans sized by their parsed duration.
//!
//! # Policy
//!
//! Layout is best-effort and never fails:
//! - Unparseable durations silently fall back to 2 hours.
//! - A scene that would run past the window is dropped, logged, and
//!   recorded in [`GridLayout::skipped`](crate::models::GridLayout);
//!   it consumes no width and later scenes keep their places.
//! - An empty schedule is an empty grid.

mod duration;
mod engine;
mod labels;

pub use duration::{parse_duration, try_parse_duration, DEFAULT_DURATION_HOURS};
pub use engine::{layout, DayLayout, GanttEngine};
pub use labels::{format_hour_label, hour_labels};
