use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::constants::default_port;
use crate::node_tools::support::query_node_tree;
use crate::node_tools::tree::prune_tree;
use crate::tool::{HandlerContext, HandlerResponse, ResponseBuilder, ToolFn, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct SceneNodeTreeParams {
    /// Start from this node instead of the scene root
    #[serde(default)]
    pub uuid: Option<String>,
    /// Depth limit: 0 returns the root alone, absent returns the whole tree
    #[serde(default)]
    pub max_depth: Option<u32>,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct SceneNodeTree;

impl ToolFn for SceneNodeTree {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: SceneNodeTreeParams = ctx.extract_typed_params()?;
            let tree = query_node_tree(params.uuid.as_deref(), params.port).await?;
            let pruned = prune_tree(&tree, params.max_depth);

            Ok(ResponseBuilder::success()
                .message("Queried the scene node tree".to_string())
                .data(json!({"tree": pruned}))
                .build())
        })
    }
}
