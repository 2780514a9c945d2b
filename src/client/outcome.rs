//! Uniform result type for network-performing operations.
//!
//! Every task client call that reaches the network resolves to an
//! [`Outcome`]: either the decoded response body, or a structured failure.
//! Transport-specific error types never escape the request executor.

use serde_json::Value;

/// Classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The remote host could not be reached, or the connection timed out
    /// before any response, after exhausting all attempts.
    ConnectionTimeout,
    /// The server rejected the request with an error status, or the
    /// request could not be issued at all.
    RequestError,
}

/// The uniform success/failure result of a network call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The decoded JSON response body.
    ///
    /// A body that is not valid JSON, or that decodes to `null`, is carried
    /// as an empty object.
    Success(Value),

    /// A terminal failure, returned as data rather than raised.
    Failure {
        /// What class of failure occurred.
        kind: FailureKind,
        /// Human-readable description of the failure.
        message: String,
        /// Decoded error response body, when the server sent one.
        response: Option<Value>,
    },
}

impl Outcome {
    /// Build a success outcome from a raw response body.
    ///
    /// Undecodable or `null` bodies collapse to `Success({})`.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Null) | Err(_) => Self::Success(Value::Object(serde_json::Map::new())),
            Ok(value) => Self::Success(value),
        }
    }

    /// Build a failure outcome.
    #[must_use]
    pub fn failure(kind: FailureKind, message: impl Into<String>, response: Option<Value>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
            response,
        }
    }

    /// Returns true for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The decoded response body, if the call succeeded.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        match self {
            Self::Success(body) => Some(body),
            Self::Failure { .. } => None,
        }
    }

    /// The failure message, if the call failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message, .. } => Some(message),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_body_valid_json() {
        let outcome = Outcome::from_body(r#"{"summary": "Test summary"}"#);
        assert_eq!(outcome, Outcome::Success(json!({"summary": "Test summary"})));
    }

    #[test]
    fn test_from_body_invalid_json_is_empty_object() {
        let outcome = Outcome::from_body("not json at all");
        assert_eq!(outcome, Outcome::Success(json!({})));
    }

    #[test]
    fn test_from_body_null_is_empty_object() {
        let outcome = Outcome::from_body("null");
        assert_eq!(outcome, Outcome::Success(json!({})));
    }

    #[test]
    fn test_from_body_empty_string_is_empty_object() {
        let outcome = Outcome::from_body("");
        assert_eq!(outcome, Outcome::Success(json!({})));
    }

    #[test]
    fn test_from_body_array_passes_through() {
        let outcome = Outcome::from_body("[1, 2, 3]");
        assert_eq!(outcome, Outcome::Success(json!([1, 2, 3])));
    }

    #[test]
    fn test_failure_constructor() {
        let outcome = Outcome::failure(
            FailureKind::RequestError,
            "HTTP status 400",
            Some(json!({"error": "Invalid request"})),
        );
        match outcome {
            Outcome::Failure {
                kind,
                message,
                response,
            } => {
                assert_eq!(kind, FailureKind::RequestError);
                assert_eq!(message, "HTTP status 400");
                assert_eq!(response, Some(json!({"error": "Invalid request"})));
            }
            Outcome::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_accessors() {
        let success = Outcome::from_body(r#"{"ok": true}"#);
        assert!(success.is_success());
        assert_eq!(success.body(), Some(&json!({"ok": true})));
        assert!(success.error_message().is_none());

        let failure = Outcome::failure(FailureKind::ConnectionTimeout, "timed out", None);
        assert!(!failure.is_success());
        assert!(failure.body().is_none());
        assert_eq!(failure.error_message(), Some("timed out"));
    }
}
