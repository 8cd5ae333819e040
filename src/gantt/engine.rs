//! Day-by-hour grid placement.
//!
//! # Algorithm
//!
//! Each day is an independent fold over its scenes with an hour offset
//! accumulator starting at 0:
//!
//! 1. Parse the scene's duration.
//! 2. If `offset + duration` exceeds the window, record the scene as
//!    skipped and keep the offset unchanged.
//! 3. Otherwise emit a cell at column `offset + 2` spanning `duration`
//!    columns and advance the offset.
//!
//! Days are laid out in input order; a skipped scene never affects
//! other scenes' placement beyond not consuming width.
//!
//! # Complexity
//! O(n) in the total number of scenes.

use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::gantt::duration::parse_duration;
use crate::models::{
    GridCell, GridLayout, GridRow, ScheduleSuggestion, SkipReason, SkippedScene,
    FIRST_SCENE_COLUMN,
};

/// Result of laying out a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLayout {
    /// The day's row.
    pub row: GridRow,
    /// Scenes of the day that produced no cell.
    pub skipped: Vec<SkippedScene>,
    /// Hours occupied after the last placed scene.
    pub final_offset: u32,
}

/// Gantt layout engine.
///
/// Stateless apart from its configuration; the same input always
/// produces the same layout.
///
/// # Example
///
/// ```
/// use u_gantt::gantt::GanttEngine;
/// use u_gantt::models::{SceneSlot, ScheduleSuggestion};
///
/// let days = vec![
///     ScheduleSuggestion::new("Day 1", "2024-08-20")
///         .with_scene(SceneSlot::new("1A", "Canyon", "Morning (4 hours)"))
///         .with_scene(SceneSlot::new("2B", "Canyon", "Afternoon (5 hours)")),
/// ];
///
/// let layout = GanttEngine::new().layout(&days);
/// assert_eq!(layout.column_count, 10);
/// assert_eq!(layout.rows[0].cells[1].start_column, 6);
/// assert_eq!(layout.rows[0].cells[1].span_columns, 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GanttEngine {
    config: LayoutConfig,
}

impl GanttEngine {
    /// Creates an engine with the default 8 AM – 6 PM window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out every day of a schedule.
    ///
    /// Always succeeds. An empty schedule yields a layout with no rows.
    pub fn layout(&self, schedule: &[ScheduleSuggestion]) -> GridLayout {
        let mut layout = GridLayout::empty(self.config.column_count(), self.config.start_hour);

        for (day_index, day) in schedule.iter().enumerate() {
            let DayLayout { row, skipped, .. } = self.layout_day(day_index, day);
            layout.rows.push(row);
            layout.skipped.extend(skipped);
        }

        debug!(
            days = layout.row_count(),
            cells = layout.cell_count(),
            skipped = layout.skipped.len(),
            columns = layout.column_count,
            "schedule laid out"
        );

        layout
    }

    /// Lays out a single day as a fold over its scenes.
    pub fn layout_day(&self, day_index: usize, day: &ScheduleSuggestion) -> DayLayout {
        let total_hours = self.config.column_count();
        let palette = self.config.effective_palette_size();

        let mut cells = Vec::with_capacity(day.scenes.len());
        let mut skipped = Vec::new();
        let mut offset: u32 = 0;

        for (scene_index, scene) in day.scenes.iter().enumerate() {
            let duration = parse_duration(&scene.estimated_time);

            if offset.saturating_add(duration) > total_hours {
                let skip = SkippedScene {
                    day_index,
                    scene_index,
                    scene_number: scene.scene_number.clone(),
                    date: day.date.clone(),
                    offset_hours: offset,
                    duration_hours: duration,
                    reason: SkipReason::Overflow,
                };
                warn!(
                    scene = %scene.scene_number,
                    date = %day.date,
                    offset_hours = offset,
                    duration_hours = duration,
                    window_hours = total_hours,
                    "{}",
                    skip.message()
                );
                skipped.push(skip);
                continue;
            }

            cells.push(GridCell {
                scene_number: scene.scene_number.clone(),
                location: scene.location.clone(),
                estimated_time_label: scene.estimated_time.clone(),
                start_column: offset.saturating_add(FIRST_SCENE_COLUMN),
                span_columns: duration,
                style_key: scene_index % palette,
            });
            offset += duration;
        }

        DayLayout {
            row: GridRow {
                label: day.day.to_string(),
                sublabel: day.date.clone(),
                notes: day.notes.clone(),
                cells,
            },
            skipped,
            final_offset: offset,
        }
    }
}

/// Lays out a schedule with the default configuration.
pub fn layout(schedule: &[ScheduleSuggestion]) -> GridLayout {
    GanttEngine::new().layout(schedule)
}
