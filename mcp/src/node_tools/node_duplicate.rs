use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct NodeDuplicateParams {
    /// UUID of the node to duplicate (copy lands under the same parent)
    pub uuid: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct NodeDuplicate;

impl ToolFn for NodeDuplicate {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: NodeDuplicateParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_SCENE,
                "duplicate-node",
                vec![json!(params.uuid)],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Duplicated node {}", params.uuid),
            ))
        })
    }
}
