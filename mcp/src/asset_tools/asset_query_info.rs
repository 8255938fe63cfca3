use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::support::resolve_uuid;
use crate::constants::{CHANNEL_ASSET_DB, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct AssetQueryInfoParams {
    /// Asset URL or UUID to inspect
    pub asset: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct AssetQueryInfo;

impl ToolFn for AssetQueryInfo {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: AssetQueryInfoParams = ctx.extract_typed_params()?;
            let uuid = resolve_uuid(&params.asset, params.port).await?;
            let result = execute_editor_request(
                CHANNEL_ASSET_DB,
                "query-asset-info",
                vec![json!(uuid)],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Queried asset info for {}", params.asset),
            ))
        })
    }
}
