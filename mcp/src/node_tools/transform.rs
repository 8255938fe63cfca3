//! Transform value normalization.
//!
//! For 2D nodes the editor ignores the out-of-plane axes but still stores
//! whatever it is sent, which leads to confusing inspector values and
//! subtle layout bugs. Normalization zeroes the ignored axes before the
//! values reach `set-property`: position keeps x/y, rotation keeps only the
//! z euler angle. Scale is meaningful on all axes for both kinds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::node_kind::NodeKind;

/// A 3-component vector as used by node transforms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Vec3 {
    /// X component
    #[serde(default)]
    pub x: f64,
    /// Y component
    #[serde(default)]
    pub y: f64,
    /// Z component
    #[serde(default)]
    pub z: f64,
}

/// Zero the position axes a node of this kind ignores
pub const fn normalize_position(kind: NodeKind, value: Vec3) -> Vec3 {
    match kind {
        NodeKind::TwoD => Vec3 { z: 0.0, ..value },
        NodeKind::ThreeD => value,
    }
}

/// Zero the rotation axes a node of this kind ignores
pub const fn normalize_rotation(kind: NodeKind, value: Vec3) -> Vec3 {
    match kind {
        NodeKind::TwoD => Vec3 {
            x: 0.0,
            y: 0.0,
            ..value
        },
        NodeKind::ThreeD => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: Vec3 = Vec3 {
        x: 1.5,
        y: -2.0,
        z: 3.25,
    };

    #[test]
    fn test_2d_position_loses_z() {
        let normalized = normalize_position(NodeKind::TwoD, V);
        assert_eq!(
            normalized,
            Vec3 {
                x: 1.5,
                y: -2.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn test_2d_rotation_keeps_only_z() {
        let normalized = normalize_rotation(NodeKind::TwoD, V);
        assert_eq!(
            normalized,
            Vec3 {
                x: 0.0,
                y: 0.0,
                z: 3.25
            }
        );
    }

    #[test]
    fn test_3d_values_untouched() {
        assert_eq!(normalize_position(NodeKind::ThreeD, V), V);
        assert_eq!(normalize_rotation(NodeKind::ThreeD, V), V);
    }

    #[test]
    fn test_missing_components_default_to_zero() {
        let parsed: Vec3 = serde_json::from_value(serde_json::json!({"x": 4.0}))
            .unwrap_or(Vec3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            });
        assert_eq!(
            parsed,
            Vec3 {
                x: 4.0,
                y: 0.0,
                z: 0.0
            }
        );
    }
}
