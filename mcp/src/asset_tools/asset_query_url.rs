use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{CHANNEL_ASSET_DB, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct AssetQueryUrlParams {
    /// Asset UUID to resolve back to a `db://` URL
    pub uuid: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct AssetQueryUrl;

impl ToolFn for AssetQueryUrl {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: AssetQueryUrlParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_ASSET_DB,
                "query-url",
                vec![json!(params.uuid)],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Resolved URL for {}", params.uuid),
            ))
        })
    }
}
