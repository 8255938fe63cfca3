use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::asset_tools::resolve_uuid;
use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct SceneOpenParams {
    /// Scene asset URL (`db://assets/...`) or UUID
    pub scene: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct SceneOpen;

impl ToolFn for SceneOpen {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: SceneOpenParams = ctx.extract_typed_params()?;
            let uuid = resolve_uuid(&params.scene, params.port).await?;
            let result = execute_editor_request(
                CHANNEL_SCENE,
                "open-scene",
                vec![json!(uuid)],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Opened scene {}", params.scene),
            ))
        })
    }
}
