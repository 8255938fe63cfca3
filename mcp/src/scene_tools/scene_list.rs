use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::constants::{CHANNEL_ASSET_DB, default_port};
use crate::editor::{EditorResult, execute_editor_request};
use crate::tool::{
    HandlerContext, HandlerResponse, ResponseBuilder, ToolFn, ToolResponse, deserialize_port,
};

const DEFAULT_SCENE_PATTERN: &str = "db://assets/**/*.scene";

fn default_pattern() -> String {
    DEFAULT_SCENE_PATTERN.to_string()
}

#[derive(Deserialize, JsonSchema)]
pub struct SceneListParams {
    /// Glob pattern to search for scene assets (default: `db://assets/**/*.scene`)
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct SceneList;

impl ToolFn for SceneList {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: SceneListParams = ctx.extract_typed_params()?;
            let result = execute_editor_request(
                CHANNEL_ASSET_DB,
                "query-assets",
                vec![json!({"pattern": params.pattern, "ccType": "cc.SceneAsset"})],
                params.port,
            )
            .await?;

            match result {
                EditorResult::Success(data) => {
                    let scenes = reshape_scene_list(data.as_ref());
                    Ok(ResponseBuilder::success()
                        .message(format!("Found {} scene(s)", scenes.len()))
                        .data(json!({"total": scenes.len(), "scenes": scenes}))
                        .build())
                }
                EditorResult::Error(error) => Ok(ToolResponse::from_editor_error(&error)),
            }
        })
    }
}

/// Reduce asset infos to the fields useful for picking a scene to open.
fn reshape_scene_list(data: Option<&Value>) -> Vec<Value> {
    let Some(Value::Array(entries)) = data else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| {
            json!({
                "name": entry.get("name").cloned().unwrap_or(Value::Null),
                "url": entry.get("url").cloned().unwrap_or(Value::Null),
                "uuid": entry.get("uuid").cloned().unwrap_or(Value::Null),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_keeps_name_url_uuid() {
        let data = json!([
            {"name": "main", "url": "db://assets/main.scene", "uuid": "s1", "importer": "scene"},
        ]);
        let scenes = reshape_scene_list(Some(&data));
        assert_eq!(
            scenes,
            vec![json!({"name": "main", "url": "db://assets/main.scene", "uuid": "s1"})]
        );
    }

    #[test]
    fn test_reshape_handles_missing_payload() {
        assert!(reshape_scene_list(None).is_empty());
        assert!(reshape_scene_list(Some(&Value::Null)).is_empty());
    }
}
