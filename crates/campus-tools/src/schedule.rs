//! Schedule query tool over a read-only calendar source

use crate::calendar::{CalendarEvent, CalendarSource, Clock, SystemClock};
use crate::schema::ToolSchema;
use campus_core::{Envelope, FailureCode, Result, Tool, ToolContext, ToolResponse};
use campus_telemetry::{safe_serialize, trace_tool_call, ToolSpanAttributes};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Matched events plus the human-readable summary for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub message: String,
    pub events: Vec<CalendarEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formatted_events: Vec<String>,
}

/// Schedule query tool
///
/// Answers free-text questions about the student calendar with deterministic
/// rule-based dispatch: today's events, the next event, a named class, or
/// the full schedule as a fallback.
pub struct ScheduleTool {
    name: String,
    description: String,
    source: Arc<dyn CalendarSource>,
    clock: Arc<dyn Clock>,
}

impl ScheduleTool {
    pub fn new(source: Arc<dyn CalendarSource>) -> Self {
        Self::with_clock(source, Arc::new(SystemClock))
    }

    /// Create with an explicit clock, so dispatch can be exercised at a
    /// fixed instant.
    pub fn with_clock(source: Arc<dyn CalendarSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            name: "get_calendar_info".to_string(),
            description: "Retrieves calendar information based on a free-text query, e.g. \
                \"What's my schedule for Monday?\", \"When is my next lecture?\", \
                \"Where is the Deep Learning class?\""
                .to_string(),
            source,
            clock,
        }
    }
}

#[async_trait]
impl Tool for ScheduleTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        ToolSchema::new()
            .property(
                "query",
                "string",
                "The query about calendar events (e.g., \"What's my schedule for Monday?\")",
            )
            .required("query")
            .build()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> Result<ToolResponse> {
        let envelope = match params["query"].as_str() {
            Some(query) => {
                let (today, now) = self.clock.now();

                tracing::debug!(
                    invocation_id = %ctx.invocation_id(),
                    tool_call_id = %ctx.function_call_id(),
                    query = %query,
                    day = %today,
                    "Processing calendar query"
                );

                Envelope::success(resolve_query(query, &today, &now, self.source.events()))
            }
            None => Envelope::error(FailureCode::Internal, "Missing 'query' parameter"),
        };

        trace_tool_call(ToolSpanAttributes {
            tool_name: self.name.clone(),
            tool_description: self.description.clone(),
            tool_call_id: ctx.function_call_id().to_string(),
            invocation_id: ctx.invocation_id().to_string(),
            args_json: safe_serialize(&params),
            response_json: safe_serialize(&envelope),
        });

        envelope.into_response()
    }
}

/// Rule-based dispatch over the calendar.
///
/// Rules are evaluated in priority order against the lower-cased query:
/// 1. "today" or the current weekday name: events for the current day
/// 2. "next": the single upcoming event
/// 3. an event title mentioned as a substring: that event
/// 4. fallback: the full schedule
pub fn resolve_query(
    query: &str,
    today: &str,
    now: &str,
    events: &[CalendarEvent],
) -> SchedulePayload {
    let query = query.to_lowercase();

    let (matched, message) = if query.contains("today") || query.contains(&today.to_lowercase()) {
        let todays: Vec<CalendarEvent> = events
            .iter()
            .filter(|event| event.day.eq_ignore_ascii_case(today))
            .cloned()
            .collect();
        if todays.is_empty() {
            (
                Vec::new(),
                format!("You have no events scheduled for {today}."),
            )
        } else {
            (todays, format!("Here are your events for {today}:"))
        }
    } else if query.contains("next") {
        // Day names compare as strings, matching the underlying list
        // contract: Friday < Monday < Saturday, not calendar order.
        let mut ordered: Vec<&CalendarEvent> = events.iter().collect();
        ordered.sort_by_key(|event| (event.day.clone(), event.start_time.clone()));

        let upcoming = ordered.into_iter().find(|event| {
            (event.day == today && event.start_time.as_str() > now) || event.day != today
        });
        match upcoming {
            Some(event) => (vec![event.clone()], "Your next event is:".to_string()),
            None => (Vec::new(), "You have no upcoming events.".to_string()),
        }
    } else if let Some(event) = events
        .iter()
        .find(|event| query.contains(&event.title.to_lowercase()))
    {
        (
            vec![event.clone()],
            format!("Here's the information about {}:", event.title),
        )
    } else {
        (
            events.to_vec(),
            "Here are all your scheduled events:".to_string(),
        )
    };

    let formatted_events = matched.iter().map(CalendarEvent::describe).collect();

    SchedulePayload {
        message,
        events: matched,
        formatted_events,
    }
}
