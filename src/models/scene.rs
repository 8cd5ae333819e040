//! Production scene model.
//!
//! A scene record is a script scene as tracked by production: where it
//! is shot, how long it runs, what it needs, and whether it already has
//! a shoot date. Only unscheduled scenes are sent to a planner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A script scene tracked by production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    /// Unique scene identifier.
    pub id: String,
    /// Owning project identifier.
    pub project_id: String,
    /// Script scene number (e.g., "21C").
    pub scene_number: String,
    /// What happens in the scene.
    pub description: String,
    /// Shooting location.
    pub location: String,
    /// Assigned shoot date. `None` = not yet scheduled.
    pub scheduled_date: Option<NaiveDate>,
    /// Estimated shooting time in minutes.
    pub duration_minutes: u32,
    /// Required equipment.
    pub equipment: Vec<String>,
    /// Production status.
    pub status: SceneStatus,
}

/// Production status of a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneStatus {
    #[default]
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl SceneRecord {
    /// Creates an unscheduled scene.
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        scene_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            scene_number: scene_number.into(),
            description: String::new(),
            location: String::new(),
            scheduled_date: None,
            duration_minutes: 0,
            equipment: Vec::new(),
            status: SceneStatus::Scheduled,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the estimated duration in minutes.
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Assigns a shoot date.
    pub fn with_scheduled_date(mut self, date: NaiveDate) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    /// Adds a piece of required equipment.
    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.push(item.into());
        self
    }

    /// Sets the production status.
    pub fn with_status(mut self, status: SceneStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the scene still needs a shoot date.
    #[inline]
    pub fn is_unscheduled(&self) -> bool {
        self.scheduled_date.is_none()
    }
}
