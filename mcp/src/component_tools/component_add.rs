use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct ComponentAddParams {
    /// UUID of the node to attach the component to
    pub uuid: String,
    /// Component class name, e.g. `cc.Sprite` or `cc.Label`
    pub component: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct ComponentAdd;

impl ToolFn for ComponentAdd {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: ComponentAddParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_SCENE,
                "create-component",
                vec![json!({"uuid": params.uuid, "component": params.component})],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Added {} to node {}", params.component, params.uuid),
            ))
        })
    }
}
