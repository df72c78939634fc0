//! Common test utilities and helpers

use campus_core::ToolContext;
use campus_tools::Clock;
use std::sync::Arc;

/// A clock pinned to a fixed weekday and time, so schedule dispatch is
/// deterministic in tests.
pub struct FixedClock {
    pub day: &'static str,
    pub time: &'static str,
}

impl Clock for FixedClock {
    fn now(&self) -> (String, String) {
        (self.day.to_string(), self.time.to_string())
    }
}

struct TestContext {
    function_call_id: String,
    invocation_id: String,
}

impl ToolContext for TestContext {
    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }

    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }
}

/// Build a tool context for a single test invocation.
pub fn test_context(call_id: &str) -> Arc<dyn ToolContext> {
    Arc::new(TestContext {
        function_call_id: call_id.to_string(),
        invocation_id: format!("inv-{call_id}"),
    })
}

/// Asserts the uniform envelope contract: a success carries payload fields
/// and no error_message; an error carries error_message and none of the
/// given payload fields.
pub fn assert_envelope_shape(result: &serde_json::Value, payload_fields: &[&str]) {
    match result["status"].as_str() {
        Some("success") => {
            assert!(
                result.get("error_message").is_none(),
                "success envelope must not carry error_message: {result}"
            );
            for field in payload_fields {
                assert!(
                    result.get(*field).is_some(),
                    "success envelope missing payload field '{field}': {result}"
                );
            }
        }
        Some("error") => {
            assert!(
                result["error_message"].is_string(),
                "error envelope must carry error_message: {result}"
            );
            for field in payload_fields {
                assert!(
                    result.get(*field).is_none(),
                    "error envelope must not carry payload field '{field}': {result}"
                );
            }
        }
        other => panic!("envelope missing status field, got {other:?}: {result}"),
    }
}
