//! Transform updates with 2D-aware normalization.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::node_kind::NodeKind;
use super::support;
use super::transform::{Vec3, normalize_position, normalize_rotation};
use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::{EditorResult, execute_editor_request};
use crate::error::Error;
use crate::tool::{
    HandlerContext, HandlerResponse, ResponseBuilder, ToolFn, ToolResponse, deserialize_port,
};

#[derive(Deserialize, JsonSchema)]
pub struct NodeSetTransformParams {
    /// UUID of the node to modify
    pub uuid: String,
    /// New local position
    #[serde(default)]
    pub position: Option<Vec3>,
    /// New local euler rotation in degrees
    #[serde(default)]
    pub rotation: Option<Vec3>,
    /// New local scale
    #[serde(default)]
    pub scale: Option<Vec3>,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct NodeSetTransform;

impl ToolFn for NodeSetTransform {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: NodeSetTransformParams = ctx.extract_typed_params()?;
            if params.position.is_none() && params.rotation.is_none() && params.scale.is_none() {
                return Err(Error::missing(
                    "transform values - provide position, rotation or scale",
                )
                .into());
            }

            // The node's kind decides which axes survive normalization
            let dump = support::query_node(&params.uuid, params.port).await?;
            let kind = NodeKind::classify_dump(&dump);

            let fields = [
                ("position", params.position.map(|v| normalize_position(kind, v))),
                ("rotation", params.rotation.map(|v| normalize_rotation(kind, v))),
                ("scale", params.scale),
            ];

            let mut applied = Vec::new();
            for (path, value) in fields {
                let Some(value) = value else { continue };
                let result = set_vec3_property(&params.uuid, path, value, params.port).await?;
                if let EditorResult::Error(error) = result {
                    return Ok(ToolResponse::from_editor_error(&error));
                }
                applied.push(path);
            }

            Ok(ResponseBuilder::success()
                .message(format!(
                    "Updated {} of node {}",
                    applied.join(", "),
                    params.uuid
                ))
                .data(json!({"kind": kind.as_ref(), "applied": applied}))
                .build())
        })
    }
}

async fn set_vec3_property(
    uuid: &str,
    path: &str,
    value: Vec3,
    port: u16,
) -> crate::error::Result<EditorResult> {
    execute_editor_request(
        CHANNEL_SCENE,
        "set-property",
        vec![json!({
            "uuid": uuid,
            "path": path,
            "dump": {
                "type": "cc.Vec3",
                "value": {"x": value.x, "y": value.y, "z": value.z},
            },
        })],
        port,
    )
    .await
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn test_params_accept_partial_transform() {
        let parsed: Result<NodeSetTransformParams, _> = serde_json::from_value(json!({
            "uuid": "n1",
            "position": {"x": 10.0, "y": 20.0},
        }));
        assert!(matches!(
            parsed,
            Ok(ref p) if p.position.is_some() && p.rotation.is_none() && p.scale.is_none()
        ));
    }

    #[test]
    fn test_vec3_dump_shape() {
        // The editor expects the {type, value} dump wrapper
        let dump = json!({
            "type": "cc.Vec3",
            "value": {"x": 1.0, "y": 2.0, "z": 0.0},
        });
        assert_eq!(dump["type"], "cc.Vec3");
        assert!(matches!(dump["value"], Value::Object(_)));
    }
}
