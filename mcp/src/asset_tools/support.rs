//! Shared helpers for asset database tools.

use serde_json::json;

use crate::constants::CHANNEL_ASSET_DB;
use crate::editor::{EditorResult, execute_editor_request};
use crate::error::{Error, Result};

/// Resolve an asset reference to a UUID.
///
/// Cocos Creator addresses assets both by `db://` URL and by opaque UUID.
/// Tools accept either; URLs are resolved through `asset-db/query-uuid`
/// before use, UUIDs pass through untouched.
pub async fn resolve_uuid(url_or_uuid: &str, port: u16) -> Result<String> {
    if !url_or_uuid.starts_with("db://") {
        return Ok(url_or_uuid.to_string());
    }

    let result = execute_editor_request(
        CHANNEL_ASSET_DB,
        "query-uuid",
        vec![json!(url_or_uuid)],
        port,
    )
    .await?;

    match result {
        EditorResult::Success(Some(serde_json::Value::String(uuid))) if !uuid.is_empty() => {
            Ok(uuid)
        }
        EditorResult::Success(_) => Err(Error::tool_call_failed(format!(
            "Editor returned no UUID for '{url_or_uuid}' - does the asset exist?"
        ))
        .into()),
        EditorResult::Error(error) => Err(Error::tool_call_failed_with_details(
            format!("Could not resolve '{url_or_uuid}': {}", error.message),
            json!({"code": error.code}),
        )
        .into()),
    }
}
