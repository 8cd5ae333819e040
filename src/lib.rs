//! Shooting-schedule Gantt layout for the U-Engine ecosystem.
//!
//! Turns schedule suggestions from an external planner into a
//! render-ready day-by-hour grid. Layout is a pure, synchronous
//! function of its input and window configuration: it never fails,
//! keeps no state between calls, and degrades scene by scene rather
//! than blanking the schedule.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ScheduleSuggestion`, `SceneSlot`,
//!   `SceneRecord`, `GridLayout`, `GridRow`, `GridCell`, `SkippedScene`
//! - **`config`**: Visible window and palette (`LayoutConfig`)
//! - **`gantt`**: Duration parsing, hour labels, and the `GanttEngine`
//! - **`summary`**: Occupancy metrics over a computed grid
//! - **`validation`**: Advisory checks over planner output
//! - **`suggest`**: Request/response contract with the planner
//!
//! # Example
//!
//! ```
//! use u_gantt::gantt::{hour_labels, layout};
//! use u_gantt::config::LayoutConfig;
//! use u_gantt::suggest::parse_response;
//!
//! let answer = r#"{"schedule": [{
//!     "day": "Day 1",
//!     "date": "2024-08-20",
//!     "scenes": [
//!         {"sceneNumber": "1A", "location": "Canyon", "estimatedTime": "Morning (4 hours)"},
//!         {"sceneNumber": "2B", "location": "Canyon", "estimatedTime": "(7 hours)"}
//!     ],
//!     "notes": ""
//! }]}"#;
//!
//! let grid = layout(&parse_response(answer).unwrap());
//! assert_eq!(grid.rows[0].cells.len(), 1);
//! assert_eq!(grid.skipped[0].scene_number, "2B");
//! assert_eq!(hour_labels(&LayoutConfig::default())[0], "8 AM");
//! ```

pub mod config;
pub mod gantt;
pub mod models;
pub mod suggest;
pub mod summary;
pub mod validation;
