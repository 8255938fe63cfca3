//! Shared scene queries used by several node tools.

use serde_json::{Value, json};

use crate::constants::CHANNEL_SCENE;
use crate::editor::{EditorResult, execute_editor_request};
use crate::error::{Error, Result};

/// Fetch the scene node tree, starting at `root` when given
pub async fn query_node_tree(root: Option<&str>, port: u16) -> Result<Value> {
    let args = root.map_or_else(Vec::new, |uuid| vec![json!(uuid)]);
    let result = execute_editor_request(CHANNEL_SCENE, "query-node-tree", args, port).await?;

    match result {
        EditorResult::Success(Some(tree)) => Ok(tree),
        EditorResult::Success(None) => Err(Error::tool_call_failed(
            "Editor returned an empty node tree - is a scene open?",
        )
        .into()),
        EditorResult::Error(error) => Err(Error::tool_call_failed_with_details(
            format!("Could not query node tree: {}", error.message),
            json!({"code": error.code}),
        )
        .into()),
    }
}

/// Fetch the inspector dump for one node
pub async fn query_node(uuid: &str, port: u16) -> Result<Value> {
    let result =
        execute_editor_request(CHANNEL_SCENE, "query-node", vec![json!(uuid)], port).await?;

    match result {
        EditorResult::Success(Some(dump)) => Ok(dump),
        EditorResult::Success(None) => Err(Error::tool_call_failed(format!(
            "Editor returned no data for node '{uuid}'"
        ))
        .into()),
        EditorResult::Error(error) => Err(Error::tool_call_failed_with_details(
            format!("Could not query node '{uuid}': {}", error.message),
            json!({"code": error.code}),
        )
        .into()),
    }
}
