//! Shooting-schedule domain models.
//!
//! Provides the input types produced by a schedule planner, the
//! production scene records a planner is asked about, and the derived
//! grid types handed to a renderer.
//!
//! # Data Flow
//!
//! | Stage | Type | Owner |
//! |-------|------|-------|
//! | Planner request | `SceneRecord` | production |
//! | Planner answer | `ScheduleSuggestion`, `SceneSlot` | planner |
//! | Render input | `GridLayout`, `GridRow`, `GridCell` | layout engine |

mod layout;
mod scene;
mod suggestion;

pub use layout::{
    GridCell, GridLayout, GridRow, SkipReason, SkippedScene, FIRST_SCENE_COLUMN,
};
pub use scene::{SceneRecord, SceneStatus};
pub use suggestion::{DayLabel, SceneSlot, ScheduleSuggestion};
