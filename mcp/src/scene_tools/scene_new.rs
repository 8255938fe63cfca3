use schemars::JsonSchema;
use serde::Deserialize;

use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct SceneNewParams {
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct SceneNew;

impl ToolFn for SceneNew {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: SceneNewParams = ctx.extract_typed_params()?;
            let result =
                execute_editor_request(CHANNEL_SCENE, "new-scene", Vec::new(), params.port).await?;

            Ok(ToolResponse::from_editor(
                result,
                "Created a new empty scene".to_string(),
            ))
        })
    }
}
