//! Multi-pattern asset search.
//!
//! `asset-db/query-assets` takes a single glob pattern, so this tool issues
//! one query per pattern and merges the result sets. Assets matched by more
//! than one pattern are de-duplicated by UUID, keeping first-seen order.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::constants::{CHANNEL_ASSET_DB, default_port};
use crate::editor::{EditorResult, execute_editor_request};
use crate::error::Error;
use crate::tool::{
    HandlerContext, HandlerResponse, ResponseBuilder, ToolFn, ToolResponse, deserialize_port,
};

#[derive(Deserialize, JsonSchema)]
pub struct AssetSearchParams {
    /// Glob patterns to search, e.g. `db://assets/**/*.prefab`
    pub patterns: Vec<String>,
    /// Restrict results to one asset type (matches `type` or `importer`)
    #[serde(default)]
    pub asset_type: Option<String>,
    /// Cap on the number of merged results
    #[serde(default)]
    pub max_results: Option<usize>,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct AssetSearch;

impl ToolFn for AssetSearch {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: AssetSearchParams = ctx.extract_typed_params()?;
            if params.patterns.is_empty() {
                return Err(Error::missing("search patterns").into());
            }

            let mut result_sets = Vec::with_capacity(params.patterns.len());
            for pattern in &params.patterns {
                let result = execute_editor_request(
                    CHANNEL_ASSET_DB,
                    "query-assets",
                    vec![json!({"pattern": pattern})],
                    params.port,
                )
                .await?;

                match result {
                    EditorResult::Success(data) => {
                        result_sets.push(data.unwrap_or_else(|| json!([])));
                    }
                    EditorResult::Error(error) => {
                        return Ok(ToolResponse::from_editor_error(&error));
                    }
                }
            }

            let merged = merge_asset_results(
                result_sets,
                params.asset_type.as_deref(),
                params.max_results,
            );

            let message = format!(
                "Found {} asset(s) across {} pattern(s)",
                merged.assets.len(),
                params.patterns.len()
            );
            Ok(ResponseBuilder::success()
                .message(message)
                .data(json!({
                    "total": merged.total,
                    "truncated": merged.truncated,
                    "assets": merged.assets,
                }))
                .build())
        })
    }
}

/// Merged search output before enveloping
struct MergedAssets {
    /// Matches surviving dedup and type filtering, before truncation
    total: usize,
    /// Whether `max_results` cut the list short
    truncated: bool,
    /// The retained asset infos
    assets: Vec<Value>,
}

/// Merge per-pattern result arrays: flatten, de-duplicate by UUID, filter by
/// type, truncate. Entries without a `uuid` field are kept as-is since they
/// cannot collide.
fn merge_asset_results(
    result_sets: Vec<Value>,
    asset_type: Option<&str>,
    max_results: Option<usize>,
) -> MergedAssets {
    let mut seen: HashSet<String> = HashSet::new();
    let mut filtered: Vec<Value> = Vec::new();

    let flattened = result_sets.into_iter().flat_map(|set| match set {
        Value::Array(entries) => entries,
        other => vec![other],
    });

    for entry in flattened {
        if let Some(uuid) = entry.get("uuid").and_then(Value::as_str)
            && !seen.insert(uuid.to_string())
        {
            continue;
        }
        if matches_asset_type(&entry, asset_type) {
            filtered.push(entry);
        }
    }

    let total = filtered.len();
    let (assets, truncated) = match max_results {
        Some(limit) if total > limit => (filtered.into_iter().take(limit).collect(), true),
        _ => (filtered, false),
    };

    MergedAssets {
        total,
        truncated,
        assets,
    }
}

fn matches_asset_type(entry: &Value, asset_type: Option<&str>) -> bool {
    let Some(wanted) = asset_type else {
        return true;
    };

    ["type", "importer"].iter().any(|field| {
        entry
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|found| found == wanted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(uuid: &str, asset_type: &str) -> Value {
        json!({"uuid": uuid, "type": asset_type, "url": format!("db://assets/{uuid}")})
    }

    #[test]
    fn test_merge_deduplicates_by_uuid_keeping_first_seen_order() {
        let merged = merge_asset_results(
            vec![
                json!([asset("a", "cc.ImageAsset"), asset("b", "cc.Prefab")]),
                json!([asset("b", "cc.Prefab"), asset("c", "cc.ImageAsset")]),
            ],
            None,
            None,
        );

        let uuids: Vec<&str> = merged
            .assets
            .iter()
            .filter_map(|entry| entry["uuid"].as_str())
            .collect();
        assert_eq!(uuids, vec!["a", "b", "c"]);
        assert_eq!(merged.total, 3);
        assert!(!merged.truncated);
    }

    #[test]
    fn test_merge_filters_by_type() {
        let merged = merge_asset_results(
            vec![json!([
                asset("a", "cc.ImageAsset"),
                asset("b", "cc.Prefab"),
            ])],
            Some("cc.Prefab"),
            None,
        );

        assert_eq!(merged.assets.len(), 1);
        assert_eq!(merged.assets[0]["uuid"], "b");
    }

    #[test]
    fn test_merge_truncates_and_reports_total() {
        let merged = merge_asset_results(
            vec![json!([
                asset("a", "cc.Prefab"),
                asset("b", "cc.Prefab"),
                asset("c", "cc.Prefab"),
            ])],
            None,
            Some(2),
        );

        assert_eq!(merged.assets.len(), 2);
        assert_eq!(merged.total, 3);
        assert!(merged.truncated);
    }

    #[test]
    fn test_merge_keeps_uuidless_entries() {
        let merged = merge_asset_results(vec![json!([{"url": "x"}, {"url": "y"}])], None, None);
        assert_eq!(merged.assets.len(), 2);
    }
}
