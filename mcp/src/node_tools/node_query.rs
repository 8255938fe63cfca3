//! Single-node inspection with dump flattening.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::node_kind::{NodeKind, component_types};
use super::support;
use crate::constants::default_port;
use crate::tool::{
    HandlerContext, HandlerResponse, ResponseBuilder, ToolFn, deserialize_port,
};

#[derive(Deserialize, JsonSchema)]
pub struct NodeQueryParams {
    /// UUID of the node to inspect
    pub uuid: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct NodeQuery;

impl ToolFn for NodeQuery {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: NodeQueryParams = ctx.extract_typed_params()?;
            let dump = support::query_node(&params.uuid, params.port).await?;
            let info = reshape_node_dump(&params.uuid, &dump);

            let name = info["name"].as_str().unwrap_or(&params.uuid).to_string();
            Ok(ResponseBuilder::success()
                .message(format!("Queried node '{name}'"))
                .data(info)
                .build())
        })
    }
}

/// Unwrap a dump field's `value`, or pass a plain field through
fn dump_value(dump: &Value, field: &str) -> Value {
    dump.get(field).map_or(Value::Null, |value| {
        value.get("value").cloned().unwrap_or_else(|| value.clone())
    })
}

/// Flatten the editor's inspector dump into the fields tools care about
fn reshape_node_dump(uuid: &str, dump: &Value) -> Value {
    let kind = NodeKind::classify_dump(dump);
    json!({
        "uuid": uuid,
        "name": dump_value(dump, "name"),
        "active": dump_value(dump, "active"),
        "kind": kind.as_ref(),
        "position": dump_value(dump, "position"),
        "rotation": dump_value(dump, "rotation"),
        "scale": dump_value(dump, "scale"),
        "components": component_types(dump),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_flattens_dump_values() {
        let dump = json!({
            "name": {"value": "Player"},
            "active": {"value": true},
            "position": {"value": {"x": 1.0, "y": 2.0, "z": 0.0}},
            "rotation": {"value": {"x": 0.0, "y": 0.0, "z": 45.0}},
            "scale": {"value": {"x": 1.0, "y": 1.0, "z": 1.0}},
            "__comps__": [{"__type__": "cc.Sprite"}],
        });

        let info = reshape_node_dump("node-1", &dump);
        assert_eq!(info["name"], "Player");
        assert_eq!(info["active"], true);
        assert_eq!(info["kind"], "2d");
        assert_eq!(info["position"]["y"], 2.0);
        assert_eq!(info["components"], json!(["cc.Sprite"]));
    }

    #[test]
    fn test_reshape_tolerates_missing_fields() {
        let info = reshape_node_dump("node-2", &json!({}));
        assert_eq!(info["uuid"], "node-2");
        assert_eq!(info["name"], Value::Null);
        assert_eq!(info["components"], json!([]));
        assert_eq!(info["kind"], "3d");
    }
}
