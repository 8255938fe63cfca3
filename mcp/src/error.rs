//! Error types shared across the server.
//!
//! Errors raised inside tool handlers never escape to the MCP client as raw
//! protocol errors. The dispatcher formats them into the standard
//! `{success: false, ...}` envelope; only framework-level failures (unknown
//! tool name, transport breakage) become `ErrorData`.

use rmcp::ErrorData as McpError;
use thiserror::Error;

// Error message prefixes
const MSG_FAILED_TO_PREFIX: &str = "Failed to";
const MSG_INVALID_PREFIX: &str = "Invalid";
const MSG_MISSING_PREFIX: &str = "Missing";

/// Result type for the `cocos_creator_mcp` server
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Internal error types for detailed error categorization
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure talking to the editor bridge
    #[error("Editor communication failed: {0}")]
    EditorCommunication(String),

    /// Caller supplied an argument the tool cannot use
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed JSON-RPC traffic on the editor bridge
    #[error("JSON-RPC error: {0}")]
    JsonRpc(String),

    /// Request arguments did not deserialize into the tool's param struct
    #[error("Unable to extract parameters: {0}")]
    ParameterExtraction(String),

    /// Tool-level failure with optional structured details for the envelope
    #[error("Tool call error: {message}")]
    ToolCall {
        /// Human-readable failure description
        message: String,
        /// Extra context forwarded into the response `error` field
        details: Option<serde_json::Value>,
    },
}

impl Error {
    // Builder methods for common patterns

    /// Create an "Invalid X" error
    pub fn invalid(what: &str, details: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("{MSG_INVALID_PREFIX} {what}: {details}"))
    }

    /// Create a "Missing X" error
    pub fn missing(what: &str) -> Self {
        Self::InvalidArgument(format!("{MSG_MISSING_PREFIX} {what}"))
    }

    /// Create error for editor request failures
    pub fn editor_request_failed(operation: &str, error: impl std::fmt::Display) -> Self {
        Self::EditorCommunication(format!(
            "{MSG_FAILED_TO_PREFIX} {operation} editor request: {error}"
        ))
    }

    /// Create a tool error with just a message
    pub fn tool_call_failed(message: impl Into<String>) -> Self {
        Self::ToolCall {
            message: message.into(),
            details: None,
        }
    }

    /// Create a tool error with message and details
    pub fn tool_call_failed_with_details(
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self::ToolCall {
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Convert an error report into an MCP protocol error.
///
/// Only used at the service boundary - handler errors are formatted into
/// response envelopes instead.
pub fn report_to_mcp_error(report: &error_stack::Report<Error>) -> McpError {
    let context = report.current_context();
    match context {
        Error::InvalidArgument(_) | Error::ParameterExtraction(_) => {
            McpError::invalid_params(context.to_string(), None)
        }
        _ => McpError::internal_error(context.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_messages() {
        let err = Error::invalid("node uuid", "empty string");
        assert_eq!(
            err.to_string(),
            "Invalid argument: Invalid node uuid: empty string"
        );

        let err = Error::missing("script url");
        assert_eq!(err.to_string(), "Invalid argument: Missing script url");
    }

    #[test]
    fn test_tool_call_details_preserved() {
        let err =
            Error::tool_call_failed_with_details("create failed", serde_json::json!({"code": -1}));
        assert!(matches!(
            err,
            Error::ToolCall {
                ref message,
                details: Some(_),
            } if message == "create failed"
        ));
    }
}
