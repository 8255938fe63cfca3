use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{CHANNEL_ASSET_DB, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct AssetCreateParams {
    /// Target asset URL (e.g. `db://assets/scripts/Player.ts`)
    pub url: String,
    /// Initial file content; omit for asset types the importer scaffolds itself
    #[serde(default)]
    pub content: Option<String>,
    /// Overwrite an existing asset at the same URL
    #[serde(default)]
    pub overwrite: bool,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct AssetCreate;

impl ToolFn for AssetCreate {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: AssetCreateParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_ASSET_DB,
                "create-asset",
                vec![
                    json!(params.url),
                    json!(params.content),
                    json!({"overwrite": params.overwrite}),
                ],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Created asset {}", params.url),
            ))
        })
    }
}
