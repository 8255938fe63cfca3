use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct ComponentRemoveParams {
    /// UUID of the node carrying the component
    pub uuid: String,
    /// Component class name to remove, e.g. `cc.Sprite`
    pub component: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct ComponentRemove;

impl ToolFn for ComponentRemove {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: ComponentRemoveParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_SCENE,
                "remove-component",
                vec![json!({"uuid": params.uuid, "component": params.component})],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Removed {} from node {}", params.component, params.uuid),
            ))
        })
    }
}
