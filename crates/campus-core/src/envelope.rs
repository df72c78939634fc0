//! The uniform result envelope every tool returns
//!
//! The orchestrating runtime receives either a success payload or an error
//! message, never both. The enum makes the invariant structural: a value
//! cannot hold a payload and an error message at the same time.

use crate::{Result, ToolResponse};
use serde::{Deserialize, Serialize};

/// Classifies a tool failure.
///
/// Missing configuration is reported before any external call is attempted;
/// upstream covers transport, HTTP-status, and query failures; internal is
/// the catch-all for anything unexpected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCode {
    MissingCredential,
    Upstream,
    Internal,
}

/// Tagged success/error result carried inside every [`ToolResponse`].
///
/// Serializes to `{"status": "success", ...payload}` or
/// `{"status": "error", "code": ..., "error_message": ...}`, matching the
/// mapping contract the runtime expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Envelope<T> {
    Success {
        #[serde(flatten)]
        payload: T,
    },
    Error {
        code: FailureCode,
        error_message: String,
    },
}

impl<T> Envelope<T> {
    pub fn success(payload: T) -> Self {
        Envelope::Success { payload }
    }

    pub fn error(code: FailureCode, message: impl Into<String>) -> Self {
        Envelope::Error {
            code,
            error_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    /// Returns the error message, if this is an error envelope.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Envelope::Success { .. } => None,
            Envelope::Error { error_message, .. } => Some(error_message),
        }
    }

    /// Returns the payload, if this is a success envelope.
    pub fn payload(&self) -> Option<&T> {
        match self {
            Envelope::Success { payload } => Some(payload),
            Envelope::Error { .. } => None,
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Serializes the envelope into the response handed to the runtime.
    pub fn into_response(self) -> Result<ToolResponse> {
        Ok(ToolResponse {
            result: serde_json::to_value(self)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        report: String,
    }

    #[test]
    fn test_success_shape() {
        let envelope = Envelope::success(Payload {
            report: "sunny".to_string(),
        });
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["report"], "sunny");
        assert!(value.get("error_message").is_none());
    }

    #[test]
    fn test_error_shape() {
        let envelope: Envelope<Payload> =
            Envelope::error(FailureCode::MissingCredential, "no API key");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "missing_credential");
        assert_eq!(value["error_message"], "no API key");
        assert!(value.get("report").is_none());
    }

    #[test]
    fn test_round_trip() {
        let envelope = Envelope::success(Payload {
            report: "cloudy".to_string(),
        });
        let value = serde_json::to_value(&envelope).unwrap();
        let back: Envelope<Payload> = serde_json::from_value(value).unwrap();

        assert_eq!(back, envelope);
    }

    #[test]
    fn test_accessors() {
        let ok = Envelope::success(Payload {
            report: "rain".to_string(),
        });
        assert!(ok.is_success());
        assert!(ok.error_message().is_none());
        assert_eq!(ok.payload().unwrap().report, "rain");

        let err: Envelope<Payload> = Envelope::error(FailureCode::Upstream, "503");
        assert!(!err.is_success());
        assert_eq!(err.error_message(), Some("503"));
        assert!(err.payload().is_none());
    }

    #[test]
    fn test_into_response() {
        let envelope = Envelope::success(Payload {
            report: "fog".to_string(),
        });
        let response = envelope.into_response().unwrap();

        assert_eq!(
            response.result,
            json!({"status": "success", "report": "fog"})
        );
    }
}
