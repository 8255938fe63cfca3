//! Low-level client for `Editor.Message.request` forwarding.
//!
//! Every tool in this server ultimately funnels through
//! [`execute_editor_request`]: a JSON-RPC call to the bridge extension
//! running inside the Cocos Creator editor process. The bridge replays the
//! call through the editor's messaging API and returns whatever the editor
//! promise resolved (or rejected) with. No editor state lives on this side
//! of the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::http_client;
use super::json_rpc_builder::EditorJsonRpcBuilder;
use crate::constants::{
    EDITOR_DEFAULT_HOST, EDITOR_HTTP_PROTOCOL, EDITOR_JSONRPC_PATH, JSON_RPC_ERROR_METHOD_NOT_FOUND,
};
use crate::error::{Error, Result};

/// Result of one editor message round trip
#[derive(Debug, Clone)]
pub enum EditorResult {
    /// The editor promise resolved; payload may be `undefined`
    Success(Option<Value>),
    /// The editor promise rejected or the bridge refused the call
    Error(EditorError),
}

/// Error information surfaced by the editor
#[derive(Debug, Clone)]
pub struct EditorError {
    /// JSON-RPC error code
    pub code: i32,
    /// Editor's error string, kept verbatim
    pub message: String,
    /// Optional structured payload attached by the bridge
    pub data: Option<Value>,
}

/// Raw JSON-RPC response structure from the bridge
#[derive(Debug, Serialize, Deserialize)]
struct BridgeResponse {
    jsonrpc: String,
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// Raw error structure from a JSON-RPC response
#[derive(Debug, Serialize, Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

/// Build the bridge URL for the given port
pub fn build_editor_url(port: u16) -> String {
    format!("{EDITOR_HTTP_PROTOCOL}://{EDITOR_DEFAULT_HOST}:{port}{EDITOR_JSONRPC_PATH}")
}

/// Forward one `Editor.Message.request(channel, method, ...args)` call and
/// return the structured result.
pub async fn execute_editor_request(
    channel: &str,
    method: &str,
    args: Vec<Value>,
    port: u16,
) -> Result<EditorResult> {
    let url = build_editor_url(port);
    let request_body = EditorJsonRpcBuilder::new(channel, method)
        .args(args)
        .build()
        .to_string();

    debug!("editor request: {channel}/{method} body={request_body}");

    let response = send_http_request(&url, request_body, channel, method).await?;
    check_http_status(&response, channel, method, port)?;
    let bridge_response = parse_json_response(response, channel, method, port).await?;

    Ok(convert_to_editor_result(bridge_response, channel, method))
}

async fn send_http_request(
    url: &str,
    request_body: String,
    channel: &str,
    method: &str,
) -> Result<reqwest::Response> {
    let client = http_client::get_client();

    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .body(request_body)
        .send()
        .await;

    response.map_err(|e| {
        warn!("editor request failed: {channel}/{method} error={e}");

        let error_kind = if e.is_timeout() {
            "timeout"
        } else if e.is_connect() {
            "connection refused - is the editor running with the cocos-mcp-bridge extension?"
        } else {
            "request error"
        };

        error_stack::Report::new(Error::editor_request_failed(
            &format!("{channel}/{method}"),
            error_kind,
        ))
        .attach(format!("URL: {url}"))
        .attach(format!("Full error: {e}"))
    })
}

fn check_http_status(
    response: &reqwest::Response,
    channel: &str,
    method: &str,
    port: u16,
) -> Result<()> {
    if !response.status().is_success() {
        warn!(
            "editor request HTTP status error: status={}",
            response.status()
        );
        return Err(
            error_stack::Report::new(Error::JsonRpc("HTTP error".to_string()))
                .attach(format!(
                    "Editor bridge returned HTTP {}: {}",
                    response.status(),
                    response.status().canonical_reason().unwrap_or("Unknown")
                ))
                .attach(format!("Message: {channel}/{method}, Port: {port}")),
        );
    }

    Ok(())
}

async fn parse_json_response(
    response: reqwest::Response,
    channel: &str,
    method: &str,
    port: u16,
) -> Result<BridgeResponse> {
    response.json().await.map_err(|e| {
        warn!("editor response JSON parsing failed: error={e}");
        error_stack::Report::new(Error::JsonRpc("JSON parsing failed".to_string()))
            .attach("Failed to parse editor bridge response")
            .attach(format!("Message: {channel}/{method}, Port: {port}"))
            .attach(format!("Error: {e}"))
    })
}

/// Convert a raw bridge response into an [`EditorResult`]
fn convert_to_editor_result(response: BridgeResponse, channel: &str, method: &str) -> EditorResult {
    let Some(error) = response.error else {
        return EditorResult::Success(response.result);
    };

    warn!(
        "editor returned error: {channel}/{method} code={} message={}",
        error.code, error.message
    );

    // Method-not-found usually means the bridge extension predates this
    // message or is not installed at all
    let enhanced_message = if error.code == JSON_RPC_ERROR_METHOD_NOT_FOUND {
        format!(
            "{}. The editor did not recognize '{channel}/{method}' - make sure the \
             cocos-mcp-bridge extension is installed and enabled in Cocos Creator",
            error.message
        )
    } else {
        error.message
    };

    EditorResult::Error(EditorError {
        code: error.code,
        message: enhanced_message,
        data: error.data,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_build_editor_url() {
        assert_eq!(build_editor_url(8585), "http://127.0.0.1:8585/jsonrpc");
    }

    #[test]
    fn test_convert_success_passes_payload_through() {
        let response = BridgeResponse {
            jsonrpc: "2.0".to_string(),
            id: 1,
            result: Some(json!({"uuid": "abc"})),
            error: None,
        };
        let result = convert_to_editor_result(response, "asset-db", "query-uuid");
        assert!(matches!(
            result,
            EditorResult::Success(Some(ref value)) if value["uuid"] == "abc"
        ));
    }

    #[test]
    fn test_convert_success_allows_undefined_payload() {
        let response = BridgeResponse {
            jsonrpc: "2.0".to_string(),
            id: 1,
            result: None,
            error: None,
        };
        assert!(matches!(
            convert_to_editor_result(response, "scene", "save-scene"),
            EditorResult::Success(None)
        ));
    }

    #[test]
    fn test_convert_error_keeps_editor_message() {
        let response = BridgeResponse {
            jsonrpc: "2.0".to_string(),
            id: 1,
            result: None,
            error: Some(JsonRpcError {
                code: -1,
                message: "asset not found".to_string(),
                data: None,
            }),
        };
        let result = convert_to_editor_result(response, "asset-db", "query-asset-info");
        assert!(matches!(
            result,
            EditorResult::Error(ref e) if e.message == "asset not found" && e.code == -1
        ));
    }

    #[test]
    fn test_method_not_found_gets_bridge_hint() {
        let response = BridgeResponse {
            jsonrpc: "2.0".to_string(),
            id: 1,
            result: None,
            error: Some(JsonRpcError {
                code: JSON_RPC_ERROR_METHOD_NOT_FOUND,
                message: "Method not found".to_string(),
                data: None,
            }),
        };
        let result = convert_to_editor_result(response, "scene", "query-node-tree");
        assert!(matches!(
            result,
            EditorResult::Error(ref e) if e.message.contains("cocos-mcp-bridge")
        ));
    }
}
