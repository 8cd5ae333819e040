//! Layout occupancy metrics.
//!
//! Computes how well a schedule fills its visible window from a
//! computed grid.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placed Scenes | Cells in the grid |
//! | Skipped Scenes | Scenes dropped from the grid |
//! | Occupied Hours | Sum of cell spans, per day |
//! | Avg Utilization | Mean of occupied / window hours over days |
//! | Full Days | Days booked to the last column |
//! | Busiest Day | First day with the most occupied hours |

use crate::models::GridLayout;

/// Occupancy indicators for a grid layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    /// Number of shoot days.
    pub day_count: usize,
    /// Number of placed cells.
    pub placed_scenes: usize,
    /// Number of scenes dropped from the grid.
    pub skipped_scenes: usize,
    /// Occupied hours, one entry per day in row order.
    pub occupied_hours_by_day: Vec<u32>,
    /// Average window utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Days with every window hour occupied.
    pub full_days: usize,
    /// Row index with the most occupied hours. `None` for an empty grid.
    pub busiest_day: Option<usize>,
}

impl LayoutSummary {
    /// Computes the summary of a grid layout.
    pub fn calculate(layout: &GridLayout) -> Self {
        let occupied_hours_by_day: Vec<u32> =
            layout.rows.iter().map(|r| r.occupied_hours()).collect();

        let window = layout.column_count;
        let avg_utilization = if occupied_hours_by_day.is_empty() || window == 0 {
            0.0
        } else {
            let sum: f64 = occupied_hours_by_day
                .iter()
                .map(|&h| h as f64 / window as f64)
                .sum();
            sum / occupied_hours_by_day.len() as f64
        };

        let full_days = if window == 0 {
            0
        } else {
            occupied_hours_by_day.iter().filter(|&&h| h >= window).count()
        };

        // First maximum wins on ties.
        let busiest_day = occupied_hours_by_day
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, u32)>, (i, &h)| match best {
                Some((_, max)) if h <= max => best,
                _ => Some((i, h)),
            })
            .map(|(i, _)| i);

        Self {
            day_count: layout.row_count(),
            placed_scenes: layout.cell_count(),
            skipped_scenes: layout.skipped.len(),
            occupied_hours_by_day,
            avg_utilization,
            full_days,
            busiest_day,
        }
    }

    /// Whether the layout meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_skipped: usize, min_utilization: f64) -> bool {
        self.skipped_scenes <= max_skipped && self.avg_utilization >= min_utilization
    }
}
