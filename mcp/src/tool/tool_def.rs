//! Tool definition tying a name to its schema, annotations and handler.

use std::sync::Arc;

use rmcp::model::{CallToolRequestParam, CallToolResult};

use super::annotations::Annotation;
use super::handler_context::HandlerContext;
use super::response::{ResponseBuilder, ToolResponse};
use super::tool_name::ToolName;
use super::types::ToolFn;
use crate::error::Error;

/// One registered MCP tool
#[derive(Clone)]
pub struct ToolDef {
    /// Tool name and description
    pub tool_name: ToolName,
    /// Tool annotations
    pub annotations: Annotation,
    /// Handler function
    pub handler: Arc<dyn ToolFn>,
    /// Builder for the input schema registered with MCP clients
    pub input_schema: fn() -> Arc<rmcp::model::JsonObject>,
}

impl ToolDef {
    /// The wire name of this tool
    pub fn name(&self) -> &'static str {
        self.tool_name.into()
    }

    /// Run the handler and always come back with a `CallToolResult`.
    ///
    /// Internal errors are formatted into the error envelope here so they
    /// never surface as MCP protocol errors.
    pub async fn call_tool(&self, request: CallToolRequestParam) -> CallToolResult {
        let ctx = HandlerContext::new(request);

        let response = match self.handler.call(&ctx).await {
            Ok(response) => response,
            Err(report) => match report.current_context() {
                Error::ToolCall { message, details } => {
                    let mut builder = ResponseBuilder::error().message(message);
                    if let Some(details) = details {
                        builder = builder.error_details(details.clone());
                    }
                    builder.build()
                }
                context => ResponseBuilder::error()
                    .message(format!("Internal error: {context}"))
                    .build(),
            },
        };

        tracing::debug!("{} response: {}", self.name(), response.to_json());

        response.to_call_tool_result()
    }

    /// Convert to MCP Tool for registration
    pub fn to_tool(&self) -> rmcp::model::Tool {
        // Category prefix keeps related tools adjacent in client tool lists
        let enhanced_annotations = {
            let mut enhanced = self.annotations.clone();
            enhanced.title = format!("{}: {}", enhanced.category.as_ref(), enhanced.title);
            enhanced
        };

        let mut tool = rmcp::model::Tool::new(
            <&'static str>::from(self.tool_name),
            self.tool_name.description(),
            (self.input_schema)(),
        );
        tool.title = Some(self.annotations.title.clone());
        tool.output_schema = Some(super::schema::schema_object_for::<ToolResponse>());
        tool.annotations = Some(enhanced_annotations.into());
        tool
    }
}
