//! Schema generation helpers for MCP tool registration.

use std::sync::Arc;

use schemars::JsonSchema;
use schemars::generate::SchemaSettings;

/// Generate an inline JSON schema object for a param or response struct.
///
/// Subschemas are inlined because several MCP clients reject `$ref`s in tool
/// input schemas.
pub fn schema_object_for<T: JsonSchema>() -> Arc<rmcp::model::JsonObject> {
    let mut settings = SchemaSettings::default();
    settings.inline_subschemas = true;
    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();

    let Ok(schema_value) = serde_json::to_value(schema) else {
        // Fallback to empty schema if serialization fails
        return Arc::new(rmcp::model::JsonObject::new());
    };

    let schema_object = schema_value
        .as_object()
        .map_or_else(rmcp::model::JsonObject::new, Clone::clone);

    Arc::new(schema_object)
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, JsonSchema)]
    struct SampleParams {
        /// Asset URL
        url: String,
        /// Optional result cap
        #[serde(default)]
        max_results: Option<u32>,
    }

    #[test]
    fn test_schema_lists_properties_inline() {
        let schema = schema_object_for::<SampleParams>();
        let properties = schema.get("properties");
        assert!(matches!(
            properties.and_then(|p| p.as_object()),
            Some(props) if props.contains_key("url") && props.contains_key("max_results")
        ));
    }

    #[test]
    fn test_required_tracks_non_defaulted_fields() {
        let schema = schema_object_for::<SampleParams>();
        let required = schema
            .get("required")
            .and_then(|r| r.as_array())
            .cloned()
            .unwrap_or_default();
        assert!(required.iter().any(|v| v == "url"));
        assert!(!required.iter().any(|v| v == "max_results"));
    }
}
