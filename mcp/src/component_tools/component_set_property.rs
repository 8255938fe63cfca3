use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::constants::{CHANNEL_SCENE, default_port};
use crate::editor::execute_editor_request;
use crate::tool::{HandlerContext, HandlerResponse, ToolFn, ToolResponse, deserialize_port};

#[derive(Deserialize, JsonSchema)]
pub struct ComponentSetPropertyParams {
    /// UUID of the node carrying the component
    pub uuid: String,
    /// Index of the component on the node (order as listed by the editor)
    pub component_index: u32,
    /// Property path within the component, e.g. "color" or "string"
    pub path: String,
    /// Editor dump type of the property (e.g. "cc.Color", "cc.String")
    pub property_type: String,
    /// New value in the editor's dump value form
    pub value: Value,
    /// Editor bridge port (default: 8585)
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

pub struct ComponentSetProperty;

impl ToolFn for ComponentSetProperty {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: ComponentSetPropertyParams = ctx.extract_typed_params()?;
            // Component properties live under the dump's __comps__ array
            let path = format!("__comps__.{}.{}", params.component_index, params.path);
            let result = execute_editor_request(
                CHANNEL_SCENE,
                "set-property",
                vec![json!({
                    "uuid": params.uuid,
                    "path": path,
                    "dump": {
                        "type": params.property_type,
                        "value": params.value,
                    },
                })],
                params.port,
            )
            .await?;

            Ok(ToolResponse::from_editor(
                result,
                format!(
                    "Set {} on component {} of node {}",
                    params.path, params.component_index, params.uuid
                ),
            ))
        })
    }
}
