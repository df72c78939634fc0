use campus::{AssistantToolset, DefaultToolContext};
use campus_core::Toolset;
use serde_json::json;
use std::sync::Arc;

#[path = "common.rs"]
mod common;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before config resolution so ${VAR} references and env
    // fallbacks see the values
    dotenvy::dotenv().ok();

    // Structured logging + OpenTelemetry spans for every tool call.
    // Set RUST_LOG to control log level, e.g.:
    // RUST_LOG=debug cargo run --example assistant_tools
    campus_telemetry::init_telemetry();

    common::print_header("Campus Assistant Tools Demo");

    println!("Loading configuration...");
    let config = common::load_config();

    let toolset = AssistantToolset::from_config(&config)?;
    let tools = toolset.get_tools().await?;

    println!("Registered tools:");
    for tool in &tools {
        println!("  {} - {}", tool.name(), tool.description());
    }

    // The hosting runtime normally selects the tool and fills the
    // parameters; here we play orchestrator with a scripted set of calls.
    let calls = [
        (
            "get_calendar_info",
            json!({"query": "What's my schedule for today?"}),
        ),
        (
            "get_calendar_info",
            json!({"query": "When is my next lecture?"}),
        ),
        (
            "get_calendar_info",
            json!({"query": "Where is the Deep Learning Lecture?"}),
        ),
        ("get_weather", json!({"city": "London"})),
        ("get_name_stats", json!({"name": "Maria"})),
    ];

    for (index, (tool_name, params)) in calls.into_iter().enumerate() {
        let Some(tool) = tools.iter().find(|t| t.name() == tool_name) else {
            continue;
        };

        let ctx = Arc::new(DefaultToolContext::new(
            format!("call-{index}"),
            "demo-invocation".to_string(),
        ));

        println!("\n→ {tool_name} {params}");
        let response = tool.execute(ctx, params).await?;
        println!("{}", serde_json::to_string_pretty(&response.result)?);
    }

    Ok(())
}
