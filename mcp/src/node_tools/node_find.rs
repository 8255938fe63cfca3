//! Scene-wide node search by name.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::{support, tree};
use crate::constants::default_port;
use crate::tool::{
    HandlerContext, HandlerResponse, ResponseBuilder, ToolFn, deserialize_port,
};

/// Default cap on returned matches
const DEFAULT_FIND_LIMIT: usize = 20;

fn default_limit() -> usize {
    DEFAULT_FIND_LIMIT
}

#[derive(Deserialize, JsonSchema)]
pub struct NodeFindParams {
    /// Name or name fragment to search for
    pub pattern: String,
    /// Require an exact name match instead of a case-insensitive substring
    #[serde(default)]
    pub exact_match: bool,
    /// How many levels below the scene root to search (omit for unlimited)
    #[serde(default)]
    pub max_depth: Option<u32>,
    /// Cap on returned matches (default: 20)
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct NodeFind;

impl ToolFn for NodeFind {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: NodeFindParams = ctx.extract_typed_params()?;
            let scene_tree = support::query_node_tree(None, params.port).await?;

            let hits = tree::search_tree(
                &scene_tree,
                &params.pattern,
                params.exact_match,
                params.max_depth,
                params.limit,
            );

            let matches: Vec<_> = hits
                .iter()
                .map(|hit| json!({"name": hit.name, "uuid": hit.uuid, "path": hit.path}))
                .collect();

            Ok(ResponseBuilder::success()
                .message(format!(
                    "Found {} node(s) matching '{}'",
                    matches.len(),
                    params.pattern
                ))
                .data(json!({"total": matches.len(), "matches": matches}))
                .build())
        })
    }
}
