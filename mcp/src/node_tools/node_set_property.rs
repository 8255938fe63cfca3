use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct NodeSetPropertyParams {
    /// UUID of the node to modify
    pub uuid: String,
    /// Property path on the node (e.g. "name", "active", "layer")
    pub path: String,
    /// Editor dump type of the property (e.g. "cc.String", "Boolean", "cc.Vec3")
    pub property_type: String,
    /// New value in the editor's dump value form
    pub value: Value,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct NodeSetProperty;

impl ToolFn for NodeSetProperty {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: NodeSetPropertyParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_SCENE,
                "set-property",
                vec![json!({
                    "uuid": params.uuid,
                    "path": params.path,
                    "dump": {
                        "type": params.property_type,
                        "value": params.value,
                    },
                })],
                params.port,
            )
            .await?;
            Ok(ToolResponse::from_editor(
                result,
                format!("Set {} on node {}", params.path, params.uuid),
            ))
        })
    }
}
