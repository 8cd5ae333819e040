//! Grid layout (layout output) model.
//!
//! A grid layout is the derived, render-ready form of a schedule: one
//! row per shoot day, one column per visible hour, and one cell per
//! placed scene. It is rebuilt from scratch on every layout pass and
//! carries no identity between passes.
//!
//! # Column Numbering
//!
//! Columns are 1-based and column 1 is reserved for the day label, so
//! the first hour of the window is column 2 and a layout with
//! `column_count` hours spans columns `2..=column_count + 1`.

use serde::{Deserialize, Serialize};

/// First grid column available to scenes (column 1 holds the day label).
pub const FIRST_SCENE_COLUMN: u32 = 2;

/// A complete day-by-hour grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Number of hour columns in the visible window.
    pub column_count: u32,
    /// Hour of day shown in the first hour column.
    pub start_hour: u32,
    /// One row per input day, in input order.
    pub rows: Vec<GridRow>,
    /// Scenes that were dropped from the grid.
    pub skipped: Vec<SkippedScene>,
}

/// A single shoot day in the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// Day label.
    pub label: String,
    /// Date string, shown under the label.
    pub sublabel: String,
    /// Planner notes for the day.
    pub notes: String,
    /// Placed scenes, left to right. Skipped scenes are absent.
    pub cells: Vec<GridCell>,
}

/// A scene placed as a horizontal span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Scene display identifier.
    pub scene_number: String,
    /// Shooting location.
    pub location: String,
    /// The original duration descriptor, for display.
    pub estimated_time_label: String,
    /// 1-based start column, offset by the label column.
    pub start_column: u32,
    /// Width in hour columns.
    pub span_columns: u32,
    /// Index into the presentation palette, stable per scene position.
    pub style_key: usize,
}

/// A scene that produced no cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedScene {
    /// Row of the day the scene belongs to.
    pub day_index: usize,
    /// Position of the scene within its day's input.
    pub scene_index: usize,
    /// Scene display identifier.
    pub scene_number: String,
    /// Date of the day the scene belongs to.
    pub date: String,
    /// Hours already occupied on the day when the scene was reached.
    pub offset_hours: u32,
    /// Parsed duration of the scene.
    pub duration_hours: u32,
    /// Why the scene was skipped.
    pub reason: SkipReason,
}

/// Classification of skipped scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Placing the scene would run past the end of the window.
    Overflow,
}

impl GridLayout {
    /// Creates a layout with no rows.
    pub fn empty(column_count: u32, start_hour: u32) -> Self {
        Self {
            column_count,
            start_hour,
            rows: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Whether the layout has no rows ("no schedule" state).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at `index`.
    pub fn row(&self, index: usize) -> Option<&GridRow> {
        self.rows.get(index)
    }

    /// Total number of placed cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    /// Whether every scene of the input was placed.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Skipped scenes belonging to a given day.
    pub fn skipped_for_day(&self, day_index: usize) -> Vec<&SkippedScene> {
        self.skipped
            .iter()
            .filter(|s| s.day_index == day_index)
            .collect()
    }
}

impl GridRow {
    /// Hours occupied by placed cells.
    pub fn occupied_hours(&self) -> u32 {
        self.cells.iter().map(|c| c.span_columns).sum()
    }

    /// Exclusive end column of the last cell, or the first scene column
    /// for an empty row.
    pub fn end_column(&self) -> u32 {
        self.cells
            .last()
            .map(GridCell::end_column)
            .unwrap_or(FIRST_SCENE_COLUMN)
    }
}

impl GridCell {
    /// Exclusive end column.
    #[inline]
    pub fn end_column(&self) -> u32 {
        self.start_column.saturating_add(self.span_columns)
    }

    /// Hours from the start of the window to the start of this cell.
    #[inline]
    pub fn start_hour_offset(&self) -> u32 {
        self.start_column.saturating_sub(FIRST_SCENE_COLUMN)
    }

    /// Hover text: `Scene {number} ({location}) - {estimated time}`.
    pub fn tooltip(&self) -> String {
        format!(
            "Scene {} ({}) - {}",
            self.scene_number, self.location, self.estimated_time_label
        )
    }
}

impl SkippedScene {
    /// Human-readable description of the skip.
    pub fn message(&self) -> String {
        match self.reason {
            SkipReason::Overflow => format!(
                "Scene {} on {} exceeds the scheduled day time ({}h booked + {}h)",
                self.scene_number, self.date, self.offset_hours, self.duration_hours
            ),
        }
    }
}
