//! Schedule suggestion (layout input) model.
//!
//! A schedule suggestion is one proposed shoot day: a display label,
//! a calendar date, the scenes to shoot in order, and free-text notes.
//! Suggestions arrive from an external planner as camelCase JSON and
//! are treated as immutable for the duration of a layout pass.
//!
//! # Wire Form
//!
//! ```json
//! {
//!   "day": "Day 1",
//!   "date": "2024-08-20",
//!   "scenes": [
//!     { "sceneNumber": "1A", "location": "Canyon", "estimatedTime": "Morning (4 hours)" }
//!   ],
//!   "notes": "Grouped by location."
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display label of a shoot day.
///
/// Planners emit either a number (`1`) or text (`"Day 1"`). The label is
/// never interpreted by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayLabel {
    /// Numeric day ordinal.
    Number(i64),
    /// Free-text label.
    Text(String),
}

impl Default for DayLabel {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DayLabel {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for DayLabel {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DayLabel {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A scene slotted into a shoot day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneSlot {
    /// Display identifier (e.g., "21C").
    pub scene_number: String,
    /// Shooting location.
    pub location: String,
    /// Free-text duration descriptor, e.g. "Morning (4 hours)".
    pub estimated_time: String,
}

impl SceneSlot {
    /// Creates a new scene slot.
    pub fn new(
        scene_number: impl Into<String>,
        location: impl Into<String>,
        estimated_time: impl Into<String>,
    ) -> Self {
        Self {
            scene_number: scene_number.into(),
            location: location.into(),
            estimated_time: estimated_time.into(),
        }
    }
}

/// One proposed shoot day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSuggestion {
    /// Day label (ordinal or text).
    pub day: DayLabel,
    /// Calendar date string. Display only, never parsed.
    pub date: String,
    /// Scenes in shooting order.
    pub scenes: Vec<SceneSlot>,
    /// Planner rationale. Opaque to the engine.
    pub notes: String,
}

impl ScheduleSuggestion {
    /// Creates a day with no scenes.
    pub fn new(day: impl Into<DayLabel>, date: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            date: date.into(),
            scenes: Vec::new(),
            notes: String::new(),
        }
    }

    /// Appends a scene.
    pub fn with_scene(mut self, scene: SceneSlot) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Number of scenes on this day.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_label_display() {
        assert_eq!(DayLabel::from(3).to_string(), "3");
        assert_eq!(DayLabel::from("Day 1").to_string(), "Day 1");
        assert_eq!(DayLabel::default().to_string(), "");
    }

    #[test]
    fn test_deserialize_text_day() {
        let json = r#"{
            "day": "Day 1",
            "date": "2024-08-20",
            "scenes": [
                {"sceneNumber": "1A", "location": "Canyon", "estimatedTime": "Morning (4 hours)"}
            ],
            "notes": "Canyon first."
        }"#;
        let day: ScheduleSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(day.day, DayLabel::Text("Day 1".into()));
        assert_eq!(day.scenes[0].scene_number, "1A");
        assert_eq!(day.scenes[0].estimated_time, "Morning (4 hours)");
        assert_eq!(day.notes, "Canyon first.");
    }

    #[test]
    fn test_deserialize_numeric_day_and_missing_fields() {
        let json = r#"{"day": 2, "date": "2024-08-21"}"#;
        let day: ScheduleSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(day.day, DayLabel::Number(2));
        assert!(day.scenes.is_empty());
        assert!(day.notes.is_empty());
    }

    #[test]
    fn test_serialize_camel_case() {
        let slot = SceneSlot::new("2B", "Studio B", "Afternoon (3 hours)");
        let value = serde_json::to_value(&slot).unwrap();
        assert_eq!(value["sceneNumber"], "2B");
        assert_eq!(value["estimatedTime"], "Afternoon (3 hours)");
    }

    #[test]
    fn test_builder() {
        let day = ScheduleSuggestion::new("Day 1", "2024-08-20")
            .with_scene(SceneSlot::new("1A", "Canyon", "(4 hours)"))
            .with_scene(SceneSlot::new("2B", "Canyon", "(2 hours)"))
            .with_notes("same location");
        assert_eq!(day.scene_count(), 2);
        assert_eq!(day.notes, "same location");
    }
}
