use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{CHANNEL_ASSET_DB, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct AssetCopyParams {
    /// Source asset URL
    pub source: String,
    /// Destination asset URL
    pub target: String,
    /// Overwrite the destination if it already exists
    #[serde(default)]
    pub overwrite: bool,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct AssetCopy;

impl ToolFn for AssetCopy {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: AssetCopyParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_ASSET_DB,
                "copy-asset",
                vec![
                    json!(params.source),
                    json!(params.target),
                    json!({"overwrite": params.overwrite}),
                ],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Copied {} to {}", params.source, params.target),
            ))
        })
    }
}
