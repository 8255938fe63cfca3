//! 2D/3D node classification.
//!
//! Cocos Creator treats UI/2D nodes and 3D nodes differently: 2D nodes live
//! under a Canvas and only the in-plane transform axes are meaningful. The
//! editor does not expose a node's "dimensionality" directly, so tools
//! classify from the components a node carries (or was requested with) and
//! fall back to name keywords.

use serde_json::Value;
use strum::{AsRefStr, Display};

/// Components that mark a node as 2D/UI
const TWO_D_COMPONENTS: &[&str] = &[
    "cc.Button",
    "cc.Canvas",
    "cc.EditBox",
    "cc.Graphics",
    "cc.Label",
    "cc.Layout",
    "cc.Mask",
    "cc.PageView",
    "cc.ProgressBar",
    "cc.RichText",
    "cc.ScrollView",
    "cc.Slider",
    "cc.Sprite",
    "cc.Toggle",
    "cc.UIOpacity",
    "cc.UITransform",
    "cc.Widget",
];

/// Components that mark a node as 3D
const THREE_D_COMPONENTS: &[&str] = &[
    "cc.Camera",
    "cc.DirectionalLight",
    "cc.MeshRenderer",
    "cc.ParticleSystem",
    "cc.SkinnedMeshRenderer",
    "cc.SphereLight",
    "cc.SpotLight",
    "cc.Terrain",
];

/// Name keywords hinting at a 2D node
const TWO_D_NAME_HINTS: &[&str] = &["2d", "button", "canvas", "hud", "label", "sprite", "ui"];

/// Name keywords hinting at a 3D node
const THREE_D_NAME_HINTS: &[&str] = &["3d", "camera", "cube", "light", "mesh", "terrain"];

/// Dimensionality of a scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// UI/2D node - lives under a Canvas, z axis is ignored
    #[strum(serialize = "2d")]
    TwoD,
    /// Regular 3D node
    #[strum(serialize = "3d")]
    ThreeD,
}

impl NodeKind {
    /// Classify from a node name and its component type list.
    ///
    /// Components win over name keywords; name keywords win over the
    /// default. New nodes in Cocos Creator are 3D unless something says
    /// otherwise.
    pub fn classify(name: &str, components: &[String]) -> Self {
        for component in components {
            if TWO_D_COMPONENTS.contains(&component.as_str()) {
                return Self::TwoD;
            }
            if THREE_D_COMPONENTS.contains(&component.as_str()) {
                return Self::ThreeD;
            }
        }

        let lowered = name.to_lowercase();
        if TWO_D_NAME_HINTS.iter().any(|hint| lowered.contains(hint)) {
            return Self::TwoD;
        }
        if THREE_D_NAME_HINTS.iter().any(|hint| lowered.contains(hint)) {
            return Self::ThreeD;
        }

        Self::ThreeD
    }

    /// Classify from an explicit override string (`"2d"` / `"3d"`)
    pub fn from_override(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "2d" | "ui" => Some(Self::TwoD),
            "3d" => Some(Self::ThreeD),
            _ => None,
        }
    }

    /// Classify a node dump returned by `scene/query-node`.
    ///
    /// Looks at the `__comps__` component list; the node name is read from
    /// the dump's `name.value` when present.
    pub fn classify_dump(dump: &Value) -> Self {
        let components = component_types(dump);
        let name = dump
            .get("name")
            .map(|name| {
                name.as_str()
                    .or_else(|| name.get("value").and_then(Value::as_str))
                    .unwrap_or_default()
            })
            .unwrap_or_default();
        Self::classify(name, &components)
    }
}

/// Extract component type names from a `query-node` dump
pub fn component_types(dump: &Value) -> Vec<String> {
    dump.get("__comps__")
        .and_then(Value::as_array)
        .map(|comps| {
            comps
                .iter()
                .filter_map(|comp| {
                    comp.get("__type__")
                        .or_else(|| comp.get("type"))
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_component_wins_over_name() {
        // Name says 3D, component says UI
        let kind = NodeKind::classify("CameraFrame", &strings(&["cc.Sprite"]));
        assert_eq!(kind, NodeKind::TwoD);
    }

    #[test]
    fn test_name_hints_used_without_components() {
        assert_eq!(NodeKind::classify("ScoreLabel", &[]), NodeKind::TwoD);
        assert_eq!(NodeKind::classify("MainCamera", &[]), NodeKind::ThreeD);
    }

    #[test]
    fn test_default_is_3d() {
        assert_eq!(NodeKind::classify("Thing", &[]), NodeKind::ThreeD);
    }

    #[test]
    fn test_override_parsing() {
        assert_eq!(NodeKind::from_override("2D"), Some(NodeKind::TwoD));
        assert_eq!(NodeKind::from_override("ui"), Some(NodeKind::TwoD));
        assert_eq!(NodeKind::from_override("3d"), Some(NodeKind::ThreeD));
        assert_eq!(NodeKind::from_override("flat"), None);
    }

    #[test]
    fn test_classify_dump_reads_comps() {
        let dump = json!({
            "name": {"value": "Background"},
            "__comps__": [{"__type__": "cc.UITransform"}, {"__type__": "cc.Sprite"}],
        });
        assert_eq!(NodeKind::classify_dump(&dump), NodeKind::TwoD);
    }

    #[test]
    fn test_component_types_handles_missing_list() {
        assert!(component_types(&json!({"name": "x"})).is_empty());
    }
}
