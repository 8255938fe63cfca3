//! # Cocos Creator MCP Server
//!
//! A Model Context Protocol server that drives the Cocos Creator editor
//! through its message system, reached over the editor's HTTP bridge
//! extension.
//!
//! This server lets MCP clients manage assets, scenes, nodes and components
//! in a running editor through a standardized tool interface.

use std::error::Error;

use mcp_service::McpService;
use rmcp::ServiceExt;
use rmcp::transport::stdio;

mod asset_tools;
mod component_tools;
mod constants;
mod editor;
mod editor_tools;
mod error;
mod mcp_service;
mod node_tools;
mod scene_tools;
mod tool;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // File-based tracing with dynamic level management. The guard must stay
    // alive or buffered log lines are lost.
    let _guard = editor_tools::init_file_tracing();

    let service = McpService::new();

    let server = service.serve(stdio()).await?;
    server.waiting().await?;

    Ok(())
}
