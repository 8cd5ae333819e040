//! Planner request: which scenes to schedule and how to ask.

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::models::SceneRecord;

/// Input container for a schedule suggestion.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Short project description given to the planner as context.
    pub project_context: String,
    /// Production scenes. Scenes that already have a date are ignored.
    pub scenes: Vec<SceneRecord>,
    /// First shoot date the planner may use.
    pub start_date: NaiveDate,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(
        project_context: impl Into<String>,
        scenes: Vec<SceneRecord>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            project_context: project_context.into(),
            scenes,
            start_date,
        }
    }

    /// Scenes still waiting for a shoot date, in input order.
    pub fn unscheduled(&self) -> Vec<&SceneRecord> {
        self.scenes.iter().filter(|s| s.is_unscheduled()).collect()
    }

    /// Whether any scene still needs scheduling.
    pub fn has_work(&self) -> bool {
        self.scenes.iter().any(SceneRecord::is_unscheduled)
    }

    /// Builds the planner prompt.
    ///
    /// Returns `None` when every scene already has a date.
    pub fn build_prompt(&self) -> Option<String> {
        let pending = self.unscheduled();
        if pending.is_empty() {
            return None;
        }

        let scene_lines = pending
            .iter()
            .map(|scene| {
                format!(
                    "- Scene {}: Location: {}, Duration: {} minutes, Description: {}",
                    scene.scene_number, scene.location, scene.duration_minutes, scene.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        Some(format!(
            "You are an expert Assistant Director for film production. Your task is to create an efficient \
shooting schedule for a project.\n\
\n\
Project Context: {context}\n\
\n\
Here are the scenes that need to be scheduled. Pay close attention to their locations to group them efficiently.\n\
Each day should be a standard 8-hour shooting day.\n\
\n\
Scenes to schedule:\n\
{scene_lines}\n\
\n\
Please generate a logical shooting schedule based on this data. Group scenes by location to minimize company moves.\n\
Start the schedule from this date: {start}.\n\
Provide the output as a JSON object that adheres to the provided schema.\n",
            context = self.project_context,
            start = self.start_date.format("%Y-%m-%d"),
        ))
    }
}

/// JSON schema for the structured planner answer.
///
/// The answer is an object with a `schedule` array of shoot days.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "schedule": {
                "type": "array",
                "description": "The generated shooting schedule, organized by day.",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": {
                            "type": "string",
                            "description": "The day number of the shoot (e.g., 'Day 1')."
                        },
                        "date": {
                            "type": "string",
                            "description": "The suggested calendar date for this shooting day in YYYY-MM-DD format."
                        },
                        "scenes": {
                            "type": "array",
                            "description": "An array of scenes to be shot on this day.",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "sceneNumber": { "type": "string" },
                                    "location": { "type": "string" },
                                    "estimatedTime": {
                                        "type": "string",
                                        "description": "Estimated time for the shoot, e.g., 'Morning (4 hours)' or 'Full Day (8 hours)'."
                                    }
                                }
                            }
                        },
                        "notes": {
                            "type": "string",
                            "description": "Rationale for this day's schedule, like grouping by location."
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_request() -> ScheduleRequest {
        ScheduleRequest::new(
            "A sci-fi epic set on a distant desert planet.",
            vec![
                SceneRecord::new("scn-1", "proj-1", "1A")
                    .with_location("Red Rock Canyon")
                    .with_duration_minutes(120)
                    .with_scheduled_date(date(2024, 8, 15)),
                SceneRecord::new("scn-4", "proj-1", "21C")
                    .with_location("Bonneville Salt Flats")
                    .with_duration_minutes(360)
                    .with_description("High-speed chase across the salt flats."),
            ],
            date(2024, 8, 20),
        )
    }

    #[test]
    fn test_unscheduled_filter() {
        let request = sample_request();
        let pending = request.unscheduled();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].scene_number, "21C");
        assert!(request.has_work());
    }

    #[test]
    fn test_prompt_lists_pending_scenes() {
        let prompt = sample_request().build_prompt().unwrap();
        assert!(prompt.contains("Project Context: A sci-fi epic"));
        assert!(prompt.contains(
            "- Scene 21C: Location: Bonneville Salt Flats, Duration: 360 minutes, Description: High-speed chase across the salt flats."
        ));
        assert!(!prompt.contains("Scene 1A"));
        assert!(prompt.contains("Description: High-speed chase across the salt flats.\n\nPlease generate"));
        assert!(prompt.contains("2024-08-20"));
        assert!(prompt.contains("8-hour shooting day"));
    }

    #[test]
    fn test_prompt_none_when_all_scheduled() {
        let mut request = sample_request();
        request.scenes.truncate(1);
        assert!(!request.has_work());
        assert!(request.build_prompt().is_none());
    }

    #[test]
    fn test_schema_shape() {
        let schema = response_schema();
        let scene_props = &schema["properties"]["schedule"]["items"]["properties"]["scenes"]["items"]["properties"];
        assert_eq!(scene_props["estimatedTime"]["type"], "string");
        assert_eq!(schema["properties"]["schedule"]["type"], "array");
    }
}
