//! The uniform response envelope every tool returns.
//!
//! Editor responses of any shape are reshaped into
//! `{success, message?, data?, error?}` so the LLM client sees one contract
//! regardless of which editor subsystem answered.

use std::borrow::Cow;

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::editor::{EditorError, EditorResult};

/// Wrapper for Value that produces an empty object schema `{}` instead of `true` or specific types.
/// This ensures compatibility with strict JSON Schema validators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnySchemaValue(pub Value);

impl JsonSchema for AnySchemaValue {
    fn schema_name() -> Cow<'static, str> {
        "AnySchemaValue".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::Schema::default()
    }
}

/// Standard JSON response structure for all tools
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolResponse {
    /// Whether the editor operation went through
    pub success: bool,
    /// Human-readable summary of what happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload returned by the editor, reshaped where a tool documents it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AnySchemaValue>,
    /// Error details when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AnySchemaValue>,
}

impl ToolResponse {
    /// Reshape an editor round-trip result into the envelope.
    ///
    /// Success keeps the editor payload verbatim under `data`; errors keep
    /// the editor's message string untouched.
    pub fn from_editor(result: EditorResult, ok_message: impl Into<String>) -> Self {
        match result {
            EditorResult::Success(data) => {
                let mut builder = ResponseBuilder::success().message(ok_message);
                if let Some(data) = data {
                    builder = builder.data(data);
                }
                builder.build()
            }
            EditorResult::Error(error) => Self::from_editor_error(&error),
        }
    }

    /// Build an error envelope from an editor-side error
    pub fn from_editor_error(error: &EditorError) -> Self {
        let mut details = json!({
            "code": error.code,
            "message": error.message,
        });
        if let (Some(obj), Some(data)) = (details.as_object_mut(), error.data.as_ref()) {
            obj.insert("data".to_string(), data.clone());
        }

        ResponseBuilder::error()
            .message(error.message.clone())
            .error_details(details)
            .build()
    }

    /// Serialize with compact-array pretty printing for readable tool output
    pub fn to_json(&self) -> String {
        use json_pretty_compact::PrettyCompactFormatter;
        use serde_json::Serializer;

        let mut buf = Vec::new();
        let formatter = PrettyCompactFormatter::new();
        let mut ser = Serializer::with_formatter(&mut buf, formatter);

        if self.serialize(&mut ser).is_err() {
            return r#"{"success":false,"message":"Failed to serialize response"}"#.to_string();
        }

        String::from_utf8(buf).unwrap_or_else(|_| {
            r#"{"success":false,"message":"Failed to serialize response"}"#.to_string()
        })
    }

    /// Creates a `CallToolResult` from this envelope
    pub fn to_call_tool_result(&self) -> CallToolResult {
        let value = serde_json::to_value(self).unwrap_or_else(|e| {
            json!({
                "success": false,
                "message": format!("Failed to serialize response: {e}"),
            })
        });

        if self.success {
            CallToolResult::structured(value)
        } else {
            CallToolResult::structured_error(value)
        }
    }
}

/// Builder for constructing response envelopes
#[derive(Clone)]
pub struct ResponseBuilder {
    success: bool,
    message: Option<String>,
    data: Option<Value>,
    error: Option<Value>,
}

impl ResponseBuilder {
    /// Start a success envelope
    pub const fn success() -> Self {
        Self {
            success: true,
            message: None,
            data: None,
            error: None,
        }
    }

    /// Start an error envelope
    pub const fn error() -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: None,
        }
    }

    /// Set the human-readable summary
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the payload
    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Set structured error details
    pub fn error_details(mut self, details: Value) -> Self {
        self.error = Some(details);
        self
    }

    /// Finish the envelope
    pub fn build(self) -> ToolResponse {
        ToolResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(AnySchemaValue),
            error: self.error.map(AnySchemaValue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_has_no_error_field() {
        let response = ResponseBuilder::success()
            .message("created")
            .data(json!({"uuid": "abc"}))
            .build();

        let value = serde_json::to_value(&response).unwrap_or_default();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["uuid"], "abc");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_from_editor_success() {
        let response = ToolResponse::from_editor(
            EditorResult::Success(Some(json!(["a", "b"]))),
            "queried assets",
        );
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("queried assets"));
    }

    #[test]
    fn test_from_editor_error_keeps_message_verbatim() {
        let response = ToolResponse::from_editor(
            EditorResult::Error(EditorError {
                code: -32000,
                message: "Scene is not ready".to_string(),
                data: None,
            }),
            "unused",
        );
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Scene is not ready"));
        let value = serde_json::to_value(&response).unwrap_or_default();
        assert_eq!(value["error"]["code"], -32000);
    }
}
