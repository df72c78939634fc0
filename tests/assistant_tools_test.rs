//! Integration tests for the assistant's tools
//!
//! Exercises the three tools through the `Tool` trait, the way the hosting
//! runtime invokes them, and checks the uniform envelope contract across
//! success and error paths.

mod common;

use campus::AssistantToolset;
use campus_core::{CampusConfig, Tool, Toolset};
use campus_database_tools::NameStatsTool;
use campus_tools::{ScheduleTool, StaticCalendar};
use campus_web_tools::WeatherTool;
use common::{assert_envelope_shape, test_context, FixedClock};
use serde_json::json;
use std::sync::Arc;

fn schedule_on(day: &'static str, time: &'static str) -> ScheduleTool {
    ScheduleTool::with_clock(
        Arc::new(StaticCalendar::semester_schedule()),
        Arc::new(FixedClock { day, time }),
    )
}

#[tokio::test]
async fn toolset_exposes_the_assistant_tools() {
    let config = CampusConfig::test_defaults();
    let toolset = AssistantToolset::from_config(&config).unwrap();

    let tools = toolset.get_tools().await.unwrap();
    assert_eq!(tools.len(), 3);

    for tool in &tools {
        assert!(!tool.description().is_empty());
        assert_eq!(tool.schema()["type"], "object");
    }
}

#[tokio::test]
async fn every_envelope_has_exactly_one_of_payload_or_error() {
    // Success path: schedule fallback
    let schedule = schedule_on("Tuesday", "09:00");
    let response = schedule
        .execute(test_context("call-1"), json!({"query": "hello"}))
        .await
        .unwrap();
    assert_envelope_shape(&response.result, &["message", "events"]);

    // Error path: weather without a credential
    let weather = WeatherTool::new(None).unwrap();
    let response = weather
        .execute(test_context("call-2"), json!({"city": "London"}))
        .await
        .unwrap();
    assert_envelope_shape(&response.result, &["report", "data"]);

    // Error path: name stats without a warehouse connection
    let name_stats = NameStatsTool::new(None);
    let response = name_stats
        .execute(test_context("call-3"), json!({"name": "Maria"}))
        .await
        .unwrap();
    assert_envelope_shape(&response.result, &["name", "total_occurrences", "summary"]);
}

#[tokio::test]
async fn today_on_an_empty_day_is_a_success_with_a_day_specific_message() {
    let schedule = schedule_on("Tuesday", "09:00");
    let response = schedule
        .execute(test_context("call-4"), json!({"query": "what's on today?"}))
        .await
        .unwrap();

    assert_eq!(response.result["status"], "success");
    assert_eq!(response.result["events"].as_array().unwrap().len(), 0);
    assert_eq!(
        response.result["message"],
        "You have no events scheduled for Tuesday."
    );
}

#[tokio::test]
async fn next_returns_at_most_one_event() {
    for (day, time) in [
        ("Monday", "07:00"),
        ("Wednesday", "23:00"),
        ("Saturday", "12:00"),
        ("Sunday", "00:00"),
    ] {
        let schedule = schedule_on(day, time);
        let response = schedule
            .execute(test_context("call-5"), json!({"query": "what's next?"}))
            .await
            .unwrap();

        assert_eq!(response.result["status"], "success");
        assert!(response.result["events"].as_array().unwrap().len() <= 1);
    }
}

#[tokio::test]
async fn dispatch_precedence_is_today_then_next_then_title() {
    // A query naming a class still routes to "next" when the keyword is
    // present...
    let schedule = schedule_on("Tuesday", "09:00");
    let response = schedule
        .execute(
            test_context("call-6"),
            json!({"query": "when is my next machine learning lab?"}),
        )
        .await
        .unwrap();
    assert_eq!(response.result["message"], "Your next event is:");

    // ...and "today" outranks both the "next" keyword and a title mention.
    let response = schedule
        .execute(
            test_context("call-7"),
            json!({"query": "is my next machine learning lab today?"}),
        )
        .await
        .unwrap();
    assert_eq!(
        response.result["message"],
        "You have no events scheduled for Tuesday."
    );

    // A bare title mention returns exactly that event.
    let response = schedule
        .execute(
            test_context("call-8"),
            json!({"query": "where does the machine learning lab meet?"}),
        )
        .await
        .unwrap();
    let events = response.result["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Machine Learning Lab");
}

#[tokio::test]
async fn unrecognized_query_falls_back_to_the_full_schedule() {
    let schedule = schedule_on("Tuesday", "09:00");
    let response = schedule
        .execute(
            test_context("call-9"),
            json!({"query": "what is on the menu?"}),
        )
        .await
        .unwrap();

    assert_eq!(response.result["status"], "success");
    assert_eq!(response.result["events"].as_array().unwrap().len(), 7);
    assert_eq!(
        response.result["formatted_events"].as_array().unwrap().len(),
        7
    );
    assert_eq!(
        response.result["message"],
        "Here are all your scheduled events:"
    );
}

#[tokio::test]
async fn weather_maps_provider_fields_through_the_tool_trait() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "location": {"name": "Paris"},
        "current": {
            "temp_c": 21.0,
            "temp_f": 69.8,
            "humidity": 40.0,
            "wind_kph": 6.1,
            "condition": {"text": "Sunny"}
        }
    });
    let _mock = server
        .mock("GET", "/v1/current.json")
        .match_query(mockito::Matcher::UrlEncoded("q".into(), "Paris".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let weather: Arc<dyn Tool> = Arc::new(
        WeatherTool::with_base_url(Some("test-key".to_string()), server.url()).unwrap(),
    );
    let response = weather
        .execute(test_context("call-10"), json!({"city": "Paris"}))
        .await
        .unwrap();

    assert_eq!(response.result["status"], "success");
    assert_eq!(response.result["data"]["location"], "Paris");
    assert_eq!(response.result["data"]["condition"], "Sunny");
    assert!(response.result["report"]
        .as_str()
        .unwrap()
        .starts_with("The weather in Paris is Sunny"));
}

#[tokio::test]
async fn weather_without_credential_never_reaches_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let weather = WeatherTool::with_base_url(None, server.url()).unwrap();
    let response = weather
        .execute(test_context("call-11"), json!({"city": "Paris"}))
        .await
        .unwrap();

    assert_eq!(response.result["status"], "error");
    assert_eq!(response.result["code"], "missing_credential");
    mock.assert_async().await;
}
