//! Contract with the external schedule planner.
//!
//! The planner itself (typically a remote generative model) is a black
//! box. This module models what goes in and what comes out:
//!
//! - **Request**: unscheduled production scenes, project context, and a
//!   start date, rendered as a prompt plus a response schema.
//! - **Response**: JSON text parsed into [`ScheduleSuggestion`]s.
//! - **Source**: the [`SuggestionSource`] seam any planner implements.
//!
//! [`suggest_layout`] ties the pieces to the layout engine.

mod request;
mod response;

pub use request::{response_schema, ScheduleRequest};
pub use response::parse_response;

use thiserror::Error;
use tracing::{debug, info};

use crate::gantt::GanttEngine;
use crate::models::{GridLayout, ScheduleSuggestion};

/// Errors raised while obtaining a schedule suggestion.
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("planner response is not a valid schedule: {0}")]
    Json(#[from] serde_json::Error),

    #[error("planner returned an empty response")]
    EmptyResponse,

    #[error("planner failed: {0}")]
    Source(String),
}

/// A producer of schedule suggestions.
pub trait SuggestionSource {
    /// Proposes shoot days for the request's unscheduled scenes.
    fn suggest(&self, request: &ScheduleRequest)
        -> Result<Vec<ScheduleSuggestion>, SuggestionError>;
}

/// A source that always answers with the same days.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    days: Vec<ScheduleSuggestion>,
}

impl StaticSource {
    /// Creates a source answering with `days`.
    pub fn new(days: Vec<ScheduleSuggestion>) -> Self {
        Self { days }
    }

    /// Creates a source from a recorded planner answer.
    pub fn from_response(text: &str) -> Result<Self, SuggestionError> {
        Ok(Self::new(parse_response(text)?))
    }
}

impl SuggestionSource for StaticSource {
    fn suggest(
        &self,
        _request: &ScheduleRequest,
    ) -> Result<Vec<ScheduleSuggestion>, SuggestionError> {
        Ok(self.days.clone())
    }
}

/// Asks `source` for a schedule and lays it out.
///
/// When no scene needs a date the source is not consulted and the
/// result is an empty grid.
pub fn suggest_layout<S: SuggestionSource + ?Sized>(
    source: &S,
    request: &ScheduleRequest,
    engine: &GanttEngine,
) -> Result<GridLayout, SuggestionError> {
    let config = engine.config();
    if !request.has_work() {
        info!("all scenes already scheduled, skipping planner");
        return Ok(GridLayout::empty(config.column_count(), config.start_hour));
    }

    let pending = request.unscheduled().len();
    debug!(pending, start_date = %request.start_date, "requesting schedule suggestion");

    let days = source.suggest(request)?;
    Ok(engine.layout(&days))
}
