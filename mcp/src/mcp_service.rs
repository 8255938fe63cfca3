//! MCP service wiring: tool registration, listing and dispatch.

use std::collections::HashMap;

use rmcp::ErrorData as McpError;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};

use crate::error::{Error, report_to_mcp_error};
use crate::tool::{ToolDef, get_all_tool_definitions};

/// MCP service implementation for driving the Cocos Creator editor.
///
/// Exposes asset-database, scene, node and component tools that forward to
/// the editor's message system through its HTTP bridge.
#[derive(Clone)]
pub struct McpService {
    /// Tool definitions keyed by wire name for O(1) dispatch
    tool_defs: HashMap<String, ToolDef>,
    /// Pre-converted MCP tools for list operations
    tools: Vec<Tool>,
}

impl McpService {
    pub fn new() -> Self {
        let all_defs = get_all_tool_definitions();
        let tool_defs = all_defs
            .iter()
            .map(|def| (def.name().to_string(), def.clone()))
            .collect();
        let mut tools: Vec<_> = all_defs.iter().map(ToolDef::to_tool).collect();
        tools.sort_by_key(|tool| tool.name.clone());

        Self { tool_defs, tools }
    }

    fn list_mcp_tools(&self) -> ListToolsResult {
        ListToolsResult {
            meta: None,
            next_cursor: None,
            tools: self.tools.clone(),
        }
    }
}

impl ServerHandler for McpService {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(self.list_mcp_tools())
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let tool_def = self.tool_defs.get(request.name.as_ref()).ok_or_else(|| {
            report_to_mcp_error(&error_stack::Report::new(Error::InvalidArgument(format!(
                "unknown tool: {}",
                request.name
            ))))
        })?;

        Ok(tool_def.call_tool(request).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_registers_every_tool() {
        let service = McpService::new();
        assert_eq!(service.tools.len(), service.tool_defs.len());
        assert!(service.tool_defs.contains_key("asset_search"));
        assert!(service.tool_defs.contains_key("scene_node_tree"));
        assert!(service.tool_defs.contains_key("node_set_transform"));
    }

    #[test]
    fn test_tool_list_is_sorted_by_name() {
        let service = McpService::new();
        let names: Vec<_> = service.tools.iter().map(|tool| tool.name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
