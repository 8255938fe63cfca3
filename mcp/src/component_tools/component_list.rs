use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::constants::default_port;
use crate::node_tools::support;
use crate::tool::{HandlerContext, HandlerResponse, ResponseBuilder, ToolFn, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct ComponentListParams {
    /// UUID of the node to list components for
    pub uuid: String,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct ComponentList;

impl ToolFn for ComponentList {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: ComponentListParams = ctx.extract_typed_params()?;
            let dump = support::query_node(&params.uuid, params.port).await?;
            let components = reshape_components(&dump);

            Ok(ResponseBuilder::success()
                .message(format!(
                    "Node {} has {} component(s)",
                    params.uuid,
                    components.len()
                ))
                .data(json!({"total": components.len(), "components": components}))
                .build())
        })
    }
}

/// Reduce the `__comps__` dump entries to type, enabled state and (for
/// script components) the class hierarchy.
fn reshape_components(dump: &Value) -> Vec<Value> {
    let Some(Value::Array(comps)) = dump.get("__comps__") else {
        return Vec::new();
    };

    comps
        .iter()
        .map(|comp| {
            let enabled = comp.get("enabled").map_or(Value::Bool(true), |field| {
                field.get("value").cloned().unwrap_or_else(|| field.clone())
            });
            let mut entry = json!({
                "type": comp.get("__type__").cloned().unwrap_or(Value::Null),
                "enabled": enabled,
            });
            if let (Some(obj), Some(extends)) = (entry.as_object_mut(), comp.get("extends")) {
                obj.insert("extends".to_string(), extends.clone());
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_unwraps_enabled_dump_field() {
        let dump = json!({
            "__comps__": [
                {"__type__": "cc.Sprite", "enabled": {"value": false}},
                {"__type__": "cc.UITransform"},
            ],
        });

        let components = reshape_components(&dump);
        assert_eq!(
            components,
            vec![
                json!({"type": "cc.Sprite", "enabled": false}),
                json!({"type": "cc.UITransform", "enabled": true}),
            ]
        );
    }

    #[test]
    fn test_reshape_keeps_script_class_hierarchy() {
        let dump = json!({
            "__comps__": [
                {"__type__": "PlayerController", "extends": ["cc.Component"]},
            ],
        });

        let components = reshape_components(&dump);
        assert_eq!(components[0]["extends"], json!(["cc.Component"]));
    }

    #[test]
    fn test_reshape_handles_nodes_without_components() {
        assert!(reshape_components(&json!({})).is_empty());
    }
}
