//! Shared constants for editor messaging, tool parameters and networking.

use std::ops::RangeInclusive;

// ============================================================================
// EDITOR MESSAGE CHANNELS
// ============================================================================

/// Asset database channel (`Editor.Message.request('asset-db', ...)`)
pub const CHANNEL_ASSET_DB: &str = "asset-db";

/// Scene channel (`Editor.Message.request('scene', ...)`)
pub const CHANNEL_SCENE: &str = "scene";

/// Channels the raw `editor_execute` passthrough may target
pub const EDITOR_CHANNEL_ALLOWLIST: &[&str] =
    &["asset-db", "scene", "project", "preferences", "engine"];

// ============================================================================
// NETWORK CONSTANTS
// ============================================================================

/// JSON-RPC path exposed by the editor bridge extension
pub const EDITOR_JSONRPC_PATH: &str = "/jsonrpc";

/// Default host for editor bridge connections
/// Using IPv4 address directly to avoid IPv6 connection issues
pub const EDITOR_DEFAULT_HOST: &str = "127.0.0.1";

/// HTTP protocol for editor bridge connections
pub const EDITOR_HTTP_PROTOCOL: &str = "http";

/// Default port the bridge extension listens on
pub const DEFAULT_EDITOR_PORT: u16 = 8585;

/// Environment variable overriding the default bridge port
pub const EDITOR_PORT_ENV_VAR: &str = "COCOS_MCP_PORT";

/// valid ports
pub const MIN_VALID_PORT: u16 = 1024; // Non-privileged ports start here
pub const MAX_VALID_PORT: u16 = 65534; // Leave room for calculations
/// Inclusive range of ports a tool call may target
pub const VALID_PORT_RANGE: RangeInclusive<u16> = MIN_VALID_PORT..=MAX_VALID_PORT;

// ============================================================================
// JSON-RPC CONSTANTS
// ============================================================================

/// JSON-RPC protocol version sent with every bridge request
pub const JSONRPC_VERSION: &str = "2.0";
/// Fixed request id - the bridge is strictly request/response
pub const JSONRPC_DEFAULT_ID: u64 = 1;

/// "Method '...' not found" - usually means the bridge extension is missing
/// or an editor version without that message is running
pub const JSON_RPC_ERROR_METHOD_NOT_FOUND: i32 = -32601;

/// Default port for tool parameters, honoring `COCOS_MCP_PORT`
pub fn default_port() -> u16 {
    std::env::var(EDITOR_PORT_ENV_VAR)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|port| VALID_PORT_RANGE.contains(port))
        .unwrap_or(DEFAULT_EDITOR_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_in_valid_range() {
        assert!(VALID_PORT_RANGE.contains(&default_port()));
    }
}
