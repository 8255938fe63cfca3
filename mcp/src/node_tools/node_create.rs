//! Node creation with 2D/3D placement.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::node_kind::NodeKind;
use super::{support, tree};
use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::error::Error;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct NodeCreateParams {
    /// Name of the new node
    pub name: String,
    /// Parent node UUID; omitted 2D nodes go under the scene Canvas
    #[serde(default)]
    pub parent: Option<String>,
    /// Force the node kind: `2d` or `3d`. Detected from components/name when omitted
    #[serde(default)]
    pub node_type: Option<String>,
    /// Component types to add on creation (e.g. `cc.Sprite`)
    #[serde(default)]
    pub components: Option<Vec<String>>,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct NodeCreate;

impl ToolFn for NodeCreate {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: NodeCreateParams = ctx.extract_typed_params()?;

            let components = params.components.clone().unwrap_or_default();
            let kind = match params.node_type.as_deref() {
                Some(requested) => NodeKind::from_override(requested).ok_or_else(|| {
                    Error::invalid("node_type", format!("'{requested}', expected '2d' or '3d'"))
                })?,
                None => NodeKind::classify(&params.name, &components),
            };

            // 2D nodes are useless outside a Canvas; find one when the
            // caller did not pick a parent
            let parent = match (&params.parent, kind) {
                (Some(parent), _) => Some(parent.clone()),
                (None, NodeKind::TwoD) => {
                    let scene_tree = support::query_node_tree(None, params.port).await?;
                    tree::find_by_name(&scene_tree, "Canvas")
                }
                (None, NodeKind::ThreeD) => None,
            };

            let mut options = Map::new();
            options.insert("name".to_string(), json!(params.name));
            if let Some(parent) = &parent {
                options.insert("parent".to_string(), json!(parent));
            }
            if !components.is_empty() {
                options.insert("components".to_string(), json!(components));
            }

            let result = execute_editor_request(
                CHANNEL_SCENE,
                "create-node",
                vec![Value::Object(options)],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!("Created {kind} node '{}'", params.name),
            ))
        })
    }
}
