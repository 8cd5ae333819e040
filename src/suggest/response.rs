//! Planner answer parsing.
//!
//! Planners return JSON text, sometimes wrapped in a Markdown code
//! fence. Both the `{"schedule": [...]}` envelope and a bare array of
//! days are accepted.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use super::SuggestionError;
use crate::models::ScheduleSuggestion;

static FENCE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)^```[A-Za-z]*\s*(.*?)\s*```$").ok());

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponseBody {
    Envelope { schedule: Vec<ScheduleSuggestion> },
    Days(Vec<ScheduleSuggestion>),
}

/// Removes a surrounding Markdown code fence, if present.
fn strip_code_fence(text: &str) -> &str {
    FENCE_RE
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|c| c.get(1))
        .map_or(text, |m| m.as_str())
}

/// Parses a planner answer into shoot days.
///
/// # Errors
/// [`SuggestionError::EmptyResponse`] for blank text and
/// [`SuggestionError::Json`] when the text is not a schedule.
pub fn parse_response(text: &str) -> Result<Vec<ScheduleSuggestion>, SuggestionError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(SuggestionError::EmptyResponse);
    }

    let days = match serde_json::from_str(body)? {
        ResponseBody::Envelope { schedule } => schedule,
        ResponseBody::Days(days) => days,
    };
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayLabel;

    const ENVELOPE: &str = r#"{
        "schedule": [
            {
                "day": "Day 1",
                "date": "2024-08-20",
                "scenes": [
                    {"sceneNumber": "21C", "location": "Bonneville Salt Flats", "estimatedTime": "Full Day (6 hours)"}
                ],
                "notes": "Salt flats need the full day."
            },
            {
                "day": 2,
                "date": "2024-08-21",
                "scenes": [],
                "notes": ""
            }
        ]
    }"#;

    #[test]
    fn test_parse_envelope() {
        let days = parse_response(ENVELOPE).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].scenes[0].scene_number, "21C");
        assert_eq!(days[1].day, DayLabel::Number(2));
    }

    #[test]
    fn test_parse_bare_array() {
        let days = parse_response(r#"[{"day": "Day 1", "date": "2024-08-20"}]"#).unwrap();
        assert_eq!(days.len(), 1);
        assert!(days[0].scenes.is_empty());
    }

    #[test]
    fn test_parse_fenced() {
        let fenced = format!("```json\n{ENVELOPE}\n```\n");
        assert_eq!(parse_response(&fenced).unwrap().len(), 2);

        let plain_fence = "```\n[]\n```";
        assert!(parse_response(plain_fence).unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_schedule() {
        assert!(parse_response(r#"{"schedule": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_response("   \n"),
            Err(SuggestionError::EmptyResponse)
        ));
        assert!(matches!(
            parse_response("I could not build a schedule."),
            Err(SuggestionError::Json(_))
        ));
        assert!(matches!(
            parse_response(r#"{"days": 3}"#),
            Err(SuggestionError::Json(_))
        ));
    }
}
