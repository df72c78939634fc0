//! # Campus Telemetry
//!
//! OpenTelemetry integration for tracing tool executions.
//!
//! Each tool records a span per execution with structured attributes
//! following OpenTelemetry semantic conventions for generative AI tools.

mod spans;
mod tracer;

pub use spans::{safe_serialize, trace_tool_call, ToolSpanAttributes};
pub use tracer::{init_telemetry, register_span_processor};

/// OpenTelemetry span attribute constants for tool observability.
pub mod attributes {
    // Generic AI attributes
    pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";
    pub const GEN_AI_SYSTEM: &str = "gen_ai.system";

    // Tool-specific attributes
    pub const GEN_AI_TOOL_NAME: &str = "gen_ai.tool.name";
    pub const GEN_AI_TOOL_DESCRIPTION: &str = "gen_ai.tool.description";
    pub const GEN_AI_TOOL_CALL_ID: &str = "gen_ai.tool.call.id";

    // Campus assistant attributes
    pub const CAMPUS_TOOL_CALL_ARGS: &str = "campus.tool_call_args";
    pub const CAMPUS_TOOL_RESPONSE: &str = "campus.tool_response";
    pub const CAMPUS_INVOCATION_ID: &str = "campus.invocation_id";

    // System name constant
    pub const SYSTEM_NAME: &str = "campus.assistant";
}
