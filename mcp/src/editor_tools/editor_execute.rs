//! Raw editor message passthrough.
//!
//! Escape hatch for editor messages no dedicated tool covers yet. Only a
//! fixed set of channels is allowed through, so a confused caller cannot
//! reach extension-private channels.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::constants::{EDITOR_CHANNEL_ALLOWLIST, default_port};
use crate::editor::execute_editor_request;
use crate::error::Error;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct EditorExecuteParams {
    /// Editor message channel (e.g. "asset-db", "scene", "project")
    pub channel: String,
    /// Message name on the channel (e.g. "query-assets")
    pub method: String,
    /// Positional arguments for the message
    #[serde(default)]
    pub args: Vec<Value>,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct EditorExecute;

impl ToolFn for EditorExecute {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: EditorExecuteParams = ctx.extract_typed_params()?;
            if !EDITOR_CHANNEL_ALLOWLIST.contains(&params.channel.as_str()) {
                return Err(Error::invalid(
                    "channel",
                    format!(
                        "'{}' is not an allowed channel (allowed: {})",
                        params.channel,
                        EDITOR_CHANNEL_ALLOWLIST.join(", ")
                    ),
                )
                .into());
            }

            let result = execute_editor_request(
                &params.channel,
                &params.method,
                params.args,
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Executed {}/{}", params.channel, params.method),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_args_default_to_empty() {
        let parsed: Result<EditorExecuteParams, _> = serde_json::from_value(json!({
            "channel": "scene",
            "method": "query-node-tree",
        }));
        assert!(matches!(parsed, Ok(ref p) if p.args.is_empty()));
    }
}
