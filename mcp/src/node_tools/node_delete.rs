use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct NodeDeleteParams {
    /// UUID of the node to remove from the scene
    pub uuid: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct NodeDelete;

impl ToolFn for NodeDelete {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: NodeDeleteParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_SCENE,
                "remove-node",
                vec![json!({"uuid": params.uuid})],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Deleted node {}", params.uuid),
            ))
        })
    }
}
