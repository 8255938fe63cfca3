//! Attaching script components.
//!
//! Scripts are components too, but the editor wants the script's component
//! classid rather than a class name, and attaching a non-script asset fails
//! with a baffling error. This tool resolves the asset, checks its importer,
//! extracts the classid and only then issues `create-component`.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::asset_tools::resolve_uuid;
use crate::constants::{CHANNEL_ASSET_DB, CHANNEL_SCENE, default_port};
use crate::editor::{EditorResult, execute_editor_request};
use crate::error::{Error, Result};
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

const SCRIPT_IMPORTERS: &[&str] = &["typescript", "javascript"];

#[derive(Deserialize, JsonSchema)]
pub struct ScriptAttachParams {
    /// UUID of the node to attach the script to
    pub uuid: String,
    /// Script asset URL (`db://assets/...`) or UUID
    pub script: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct ScriptAttach;

impl ToolFn for ScriptAttach {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: ScriptAttachParams = ctx.extract_typed_params()?;
            let script_uuid = resolve_uuid(&params.script, params.port).await?;
            let classid = script_classid(&params.script, &script_uuid, params.port).await?;

            let result = execute_editor_request(
                CHANNEL_SCENE,
                "create-component",
                vec![json!({"uuid": params.uuid, "component": classid})],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Attached script {} to node {}", params.script, params.uuid),
            ))
        })
    }
}

/// Look up the script's component classid, rejecting non-script assets.
///
/// The editor registers each script class under a compressed-uuid classid
/// (`cid`); falls back to the asset UUID for editor versions that accept it
/// directly.
async fn script_classid(script: &str, uuid: &str, port: u16) -> Result<String> {
    let result = execute_editor_request(
        CHANNEL_ASSET_DB,
        "query-asset-info",
        vec![json!(uuid)],
        port,
    )
    .await?;

    let info = match result {
        EditorResult::Success(Some(info)) => info,
        EditorResult::Success(None) => {
            return Err(Error::tool_call_failed(format!(
                "No asset info found for script '{script}'"
            ))
            .into());
        }
        EditorResult::Error(error) => {
            return Err(Error::tool_call_failed_with_details(
                format!("Could not query script asset '{script}': {}", error.message),
                json!({"code": error.code}),
            )
            .into());
        }
    };

    let importer = info.get("importer").and_then(Value::as_str).unwrap_or("");
    if !SCRIPT_IMPORTERS.contains(&importer) {
        return Err(Error::invalid(
            "script",
            format!("'{script}' is not a script asset (importer: '{importer}')"),
        )
        .into());
    }

    let classid = info
        .get("cid")
        .or_else(|| info.pointer("/userData/cid"))
        .and_then(Value::as_str)
        .unwrap_or(uuid);
    Ok(classid.to_string())
}
