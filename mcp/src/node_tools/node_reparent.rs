use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::error::Error;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct NodeReparentParams {
    /// UUIDs of the nodes to move
    pub uuids: Vec<String>,
    /// UUID of the new parent node
    pub parent: String,
    /// Preserve each node's world transform while moving it
    #[serde(default = "default_keep_world_transform")]
    pub keep_world_transform: bool,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

const fn default_keep_world_transform() -> bool {
    true
}

pub struct NodeReparent;

impl ToolFn for NodeReparent {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: NodeReparentParams = ctx.extract_typed_params()?;
            if params.uuids.is_empty() {
                return Err(Error::missing("node uuids").into());
            }

            let result = execute_editor_request(
                CHANNEL_SCENE,
                "set-parent",
                vec![json!({
                    "parent": params.parent,
                    "uuids": params.uuids,
                    "keepWorldTransform": params.keep_world_transform,
                })],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!(
                    "Moved {} node(s) under {}",
                    params.uuids.len(),
                    params.parent
                ),
            ))
        })
    }
}
