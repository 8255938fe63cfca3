//! Per-call context handed to every tool handler.

use rmcp::model::CallToolRequestParam;
use serde_json::Value;

use crate::error::{Error, Result};

/// Context passed to all handlers containing the raw MCP request
#[derive(Clone)]
pub struct HandlerContext {
    /// The tool call as received from the MCP client
    pub request: CallToolRequestParam,
}

impl HandlerContext {
    /// Wrap an incoming request
    pub const fn new(request: CallToolRequestParam) -> Self {
        Self { request }
    }

    /// Extract typed parameters from request using serde deserialization
    pub fn extract_typed_params<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        // Missing arguments deserialize as an empty object so tools whose
        // params are all optional still work
        let args_value = self.request.arguments.as_ref().map_or_else(
            || Value::Object(serde_json::Map::new()),
            |args| Value::Object(args.clone()),
        );

        serde_json::from_value(args_value).map_err(|e| {
            error_stack::Report::new(Error::ParameterExtraction(format!(
                "Failed to parse parameters: {e}"
            )))
            .attach(format!("Tool: {}", self.request.name))
            .attach(format!("Expected type: {}", std::any::type_name::<T>()))
        })
    }
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize, JsonSchema)]
    struct DemoParams {
        url: String,
        #[serde(default)]
        overwrite: bool,
    }

    fn context_with_args(args: Option<Value>) -> HandlerContext {
        let mut request = CallToolRequestParam::new("asset_create");
        request.arguments = args.and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        });
        HandlerContext::new(request)
    }

    #[test]
    fn test_extract_typed_params() {
        let ctx = context_with_args(Some(json!({"url": "db://assets/a.png"})));
        let params = ctx.extract_typed_params::<DemoParams>();
        assert!(matches!(
            params,
            Ok(ref p) if p.url == "db://assets/a.png" && !p.overwrite
        ));
    }

    #[test]
    fn test_missing_required_field_is_extraction_error() {
        let ctx = context_with_args(Some(json!({"overwrite": true})));
        let result = ctx.extract_typed_params::<DemoParams>();
        assert!(matches!(
            result.map_err(|report| report.current_context().to_string()),
            Err(ref msg) if msg.contains("Unable to extract parameters")
        ));
    }

    #[test]
    fn test_absent_arguments_treated_as_empty_object() {
        #[derive(Deserialize, JsonSchema)]
        struct AllOptional {
            #[serde(default)]
            pattern: Option<String>,
        }

        let ctx = context_with_args(None);
        let params = ctx.extract_typed_params::<AllOptional>();
        assert!(matches!(params, Ok(ref p) if p.pattern.is_none()));
    }
}
