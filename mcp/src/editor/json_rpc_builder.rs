//! Builder for the JSON-RPC bodies sent to the editor bridge.
//!
//! The bridge maps a JSON-RPC method of the form `"<channel>/<method>"` back
//! onto `Editor.Message.request(channel, method, ...params)`, so the
//! positional `params` array here is exactly the editor call's `...args`.

use serde_json::{Value, json};

use crate::constants::{JSONRPC_DEFAULT_ID, JSONRPC_VERSION};

/// Builds a single editor bridge request body
pub struct EditorJsonRpcBuilder {
    channel: String,
    method: String,
    args: Vec<Value>,
}

impl EditorJsonRpcBuilder {
    /// Start a request for `channel`/`method`
    pub fn new(channel: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            method: method.into(),
            args: Vec::new(),
        }
    }

    /// Set the positional argument list
    pub fn args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }

    /// Produce the JSON-RPC body
    pub fn build(self) -> Value {
        json!({
            "jsonrpc": JSONRPC_VERSION,
            "id": JSONRPC_DEFAULT_ID,
            "method": format!("{}/{}", self.channel, self.method),
            "params": self.args,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_channel_and_method_joined() {
        let body = EditorJsonRpcBuilder::new("asset-db", "query-uuid")
            .args(vec![json!("db://assets/scenes/main.scene")])
            .build();

        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["method"], "asset-db/query-uuid");
        assert_eq!(body["params"], json!(["db://assets/scenes/main.scene"]));
    }

    #[test]
    fn test_empty_args_produce_empty_params_array() {
        let body = EditorJsonRpcBuilder::new("scene", "save-scene").build();
        assert_eq!(body["params"], json!([]));
    }

    #[test]
    fn test_args_set_positionally() {
        let body = EditorJsonRpcBuilder::new("scene", "set-parent")
            .args(vec![json!({"parent": "a", "uuids": ["b"]})])
            .build();

        assert_eq!(body["params"], json!([{"parent": "a", "uuids": ["b"]}]));
    }
}
