use schemars::JsonSchema;
use serde::Deserialize;

use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct SceneSaveParams {
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct SceneSave;

impl ToolFn for SceneSave {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: SceneSaveParams = ctx.extract_typed_params()?;
            let result =
                execute_editor_request(CHANNEL_SCENE, "save-scene", Vec::new(), params.port)
                    .await?;

            Ok(ToolResponse::from_editor(
                result,
                "Saved the current scene".to_string(),
            ))
        })
    }
}
