use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{CHANNEL_ASSET_DB, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct AssetDeleteParams {
    /// URL of the asset to delete
    pub url: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct AssetDelete;

impl ToolFn for AssetDelete {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: AssetDeleteParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_ASSET_DB,
                "delete-asset",
                vec![json!(params.url)],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Deleted asset {}", params.url),
            ))
        })
    }
}
