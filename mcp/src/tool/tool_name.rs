//! Tool names, descriptions and registration.
//!
//! Single source of truth for every tool the server exposes: the wire name,
//! the description shown to MCP clients, the annotations, the parameter
//! schema and the handler. Adding a tool means adding a variant here and
//! filling in the four `match` arms.

use std::sync::Arc;

use schemars::JsonSchema;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr, IntoEnumIterator};

use super::annotations::{Annotation, EnvironmentImpact, ToolCategory};
use super::schema::schema_object_for;
use super::tool_def::ToolDef;
use super::types::ToolFn;
use crate::asset_tools::{
    AssetCopy, AssetCopyParams, AssetCreate, AssetCreateParams, AssetDelete, AssetDeleteParams,
    AssetMove, AssetMoveParams, AssetQueryInfo, AssetQueryInfoParams, AssetQueryUrl,
    AssetQueryUrlParams, AssetQueryUuid, AssetQueryUuidParams, AssetReimport, AssetReimportParams,
    AssetSave, AssetSaveParams, AssetSearch, AssetSearchParams,
};
use crate::component_tools::{
    ComponentAdd, ComponentAddParams, ComponentList, ComponentListParams, ComponentRemove,
    ComponentRemoveParams, ComponentSetProperty, ComponentSetPropertyParams, ScriptAttach,
    ScriptAttachParams,
};
use crate::editor_tools::{
    EditorExecute, EditorExecuteParams, GetTraceLogPath, SetTracingLevel, SetTracingLevelParams,
};
use crate::node_tools::{
    NodeCreate, NodeCreateParams, NodeDelete, NodeDeleteParams, NodeDuplicate,
    NodeDuplicateParams, NodeFind, NodeFindParams, NodeQuery, NodeQueryParams, NodeReparent,
    NodeReparentParams, NodeSetProperty, NodeSetPropertyParams, NodeSetTransform,
    NodeSetTransformParams,
};
use crate::scene_tools::{
    SceneList, SceneListParams, SceneNew, SceneNewParams, SceneNodeTree, SceneNodeTreeParams,
    SceneOpen, SceneOpenParams, SceneSave, SceneSaveParams,
};

/// Schema for tools that take no arguments
#[derive(JsonSchema)]
struct NoParams {}

/// Tool names with automatic `snake_case` serialization
#[derive(
    AsRefStr, Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, IntoStaticStr, PartialEq,
)]
#[strum(serialize_all = "snake_case")]
pub enum ToolName {
    // Asset database tools
    AssetCopy,
    AssetCreate,
    AssetDelete,
    AssetMove,
    AssetQueryInfo,
    AssetQueryUrl,
    AssetQueryUuid,
    AssetReimport,
    AssetSave,
    AssetSearch,
    // Component tools
    ComponentAdd,
    ComponentList,
    ComponentRemove,
    ComponentSetProperty,
    ScriptAttach,
    // Editor-level tools
    EditorExecute,
    EditorGetTraceLogPath,
    EditorSetTracingLevel,
    // Node tools
    NodeCreate,
    NodeDelete,
    NodeDuplicate,
    NodeFind,
    NodeQuery,
    NodeReparent,
    NodeSetProperty,
    NodeSetTransform,
    // Scene tools
    SceneList,
    SceneNew,
    SceneNodeTree,
    SceneOpen,
    SceneSave,
}

impl ToolName {
    /// The description shown to MCP clients
    pub const fn description(self) -> &'static str {
        match self {
            Self::AssetCopy => {
                "Copy an asset to a new URL in the project's asset database. \
                 Source may be a db:// URL or a UUID."
            }
            Self::AssetCreate => {
                "Create a new asset at a db:// URL with the given text content. \
                 Fails if the asset already exists unless overwrite is set."
            }
            Self::AssetDelete => "Delete an asset (and its meta file) from the asset database.",
            Self::AssetMove => "Move or rename an asset within the asset database.",
            Self::AssetQueryInfo => {
                "Query the full asset-database info for one asset (importer, \
                 file path, sub-assets, visibility) by URL or UUID."
            }
            Self::AssetQueryUrl => "Resolve an asset UUID to its db:// URL.",
            Self::AssetQueryUuid => "Resolve a db:// URL to the asset's UUID.",
            Self::AssetReimport => "Force the editor to reimport an asset from its source file.",
            Self::AssetSave => "Overwrite an existing asset's content and trigger a reimport.",
            Self::AssetSearch => {
                "Search assets with one or more glob patterns (e.g. \
                 db://assets/**/*.prefab). Results from all patterns are merged, \
                 de-duplicated by UUID, optionally filtered by asset type and \
                 truncated to max_results."
            }
            Self::ComponentAdd => {
                "Add a component class (e.g. cc.Sprite) to a scene node by node UUID."
            }
            Self::ComponentList => {
                "List the components on a scene node with their type and enabled state."
            }
            Self::ComponentRemove => "Remove a component class from a scene node.",
            Self::ComponentSetProperty => {
                "Set a property on one of a node's components, addressed by the \
                 component's index in the node's component list."
            }
            Self::ScriptAttach => {
                "Attach a project script (TypeScript/JavaScript asset) to a scene \
                 node as a component. The asset's importer is verified first so \
                 non-script assets fail with a clear error."
            }
            Self::EditorExecute => {
                "Send a raw editor message on an allowed channel (asset-db, scene, \
                 project, preferences, engine). Escape hatch for editor messages \
                 without a dedicated tool."
            }
            Self::EditorGetTraceLogPath => {
                "Get the path to this server's trace log file, whether it exists \
                 and its size."
            }
            Self::EditorSetTracingLevel => {
                "Set this server's trace log verbosity (error, warn, info, debug, \
                 trace). Takes effect immediately."
            }
            Self::NodeCreate => {
                "Create a scene node. The node's 2D/3D kind is inferred from the \
                 requested components and name (or forced via node_type); 2D nodes \
                 without an explicit parent are placed under the Canvas."
            }
            Self::NodeDelete => "Delete a scene node (and its children) by UUID.",
            Self::NodeDuplicate => "Duplicate a scene node (and its children) by UUID.",
            Self::NodeFind => {
                "Find nodes by name in the current scene. Case-insensitive \
                 substring match by default, exact match optional; results carry \
                 each node's path from the scene root."
            }
            Self::NodeQuery => {
                "Inspect one scene node: name, active state, 2D/3D kind, \
                 transform and component types, flattened from the editor's \
                 inspector dump."
            }
            Self::NodeReparent => "Move one or more scene nodes under a new parent node.",
            Self::NodeSetProperty => {
                "Set a plain property on a scene node (e.g. name, active, layer) \
                 using the editor's dump type/value form."
            }
            Self::NodeSetTransform => {
                "Set a node's position, rotation and/or scale. For 2D nodes the \
                 ignored axes are zeroed first (position z, rotation x/y)."
            }
            Self::SceneList => "List the scene assets in the project with name, URL and UUID.",
            Self::SceneNew => "Create a new empty scene in the editor.",
            Self::SceneNodeTree => {
                "Query the current scene's node hierarchy. Optionally limited to \
                 max_depth levels (0 returns the root alone); truncated branches \
                 are marked."
            }
            Self::SceneOpen => "Open a scene in the editor by asset URL or UUID.",
            Self::SceneSave => "Save the scene currently open in the editor.",
        }
    }

    /// The annotations registered for this tool
    pub fn annotations(self) -> Annotation {
        use EnvironmentImpact::{
            AdditiveIdempotent, AdditiveNonIdempotent, DestructiveIdempotent, ReadOnly,
        };

        match self {
            Self::AssetCopy => {
                Annotation::new("Copy Asset", ToolCategory::Asset, AdditiveNonIdempotent)
            }
            Self::AssetCreate => {
                Annotation::new("Create Asset", ToolCategory::Asset, AdditiveNonIdempotent)
            }
            Self::AssetDelete => {
                Annotation::new("Delete Asset", ToolCategory::Asset, DestructiveIdempotent)
            }
            Self::AssetMove => {
                Annotation::new("Move Asset", ToolCategory::Asset, AdditiveIdempotent)
            }
            Self::AssetQueryInfo => {
                Annotation::new("Query Asset Info", ToolCategory::Asset, ReadOnly)
            }
            Self::AssetQueryUrl => {
                Annotation::new("Resolve Asset URL", ToolCategory::Asset, ReadOnly)
            }
            Self::AssetQueryUuid => {
                Annotation::new("Resolve Asset UUID", ToolCategory::Asset, ReadOnly)
            }
            Self::AssetReimport => {
                Annotation::new("Reimport Asset", ToolCategory::Asset, AdditiveIdempotent)
            }
            Self::AssetSave => {
                Annotation::new("Save Asset", ToolCategory::Asset, AdditiveIdempotent)
            }
            Self::AssetSearch => Annotation::new("Search Assets", ToolCategory::Asset, ReadOnly),
            Self::ComponentAdd => Annotation::new(
                "Add Component",
                ToolCategory::Component,
                AdditiveNonIdempotent,
            ),
            Self::ComponentList => {
                Annotation::new("List Components", ToolCategory::Component, ReadOnly)
            }
            Self::ComponentRemove => Annotation::new(
                "Remove Component",
                ToolCategory::Component,
                DestructiveIdempotent,
            ),
            Self::ComponentSetProperty => Annotation::new(
                "Set Component Property",
                ToolCategory::Component,
                AdditiveIdempotent,
            ),
            Self::ScriptAttach => Annotation::new(
                "Attach Script",
                ToolCategory::Component,
                AdditiveNonIdempotent,
            ),
            Self::EditorExecute => Annotation::new(
                "Execute Editor Message",
                ToolCategory::Editor,
                AdditiveNonIdempotent,
            ),
            Self::EditorGetTraceLogPath => {
                Annotation::new("Get Trace Log Path", ToolCategory::Logging, ReadOnly)
            }
            Self::EditorSetTracingLevel => Annotation::new(
                "Set Tracing Level",
                ToolCategory::Logging,
                AdditiveIdempotent,
            ),
            Self::NodeCreate => {
                Annotation::new("Create Node", ToolCategory::Node, AdditiveNonIdempotent)
            }
            Self::NodeDelete => {
                Annotation::new("Delete Node", ToolCategory::Node, DestructiveIdempotent)
            }
            Self::NodeDuplicate => {
                Annotation::new("Duplicate Node", ToolCategory::Node, AdditiveNonIdempotent)
            }
            Self::NodeFind => Annotation::new("Find Nodes", ToolCategory::Node, ReadOnly),
            Self::NodeQuery => Annotation::new("Query Node", ToolCategory::Node, ReadOnly),
            Self::NodeReparent => {
                Annotation::new("Reparent Nodes", ToolCategory::Node, AdditiveIdempotent)
            }
            Self::NodeSetProperty => {
                Annotation::new("Set Node Property", ToolCategory::Node, AdditiveIdempotent)
            }
            Self::NodeSetTransform => {
                Annotation::new("Set Node Transform", ToolCategory::Node, AdditiveIdempotent)
            }
            Self::SceneList => Annotation::new("List Scenes", ToolCategory::Scene, ReadOnly),
            Self::SceneNew => {
                Annotation::new("New Scene", ToolCategory::Scene, AdditiveNonIdempotent)
            }
            Self::SceneNodeTree => {
                Annotation::new("Query Node Tree", ToolCategory::Scene, ReadOnly)
            }
            Self::SceneOpen => {
                Annotation::new("Open Scene", ToolCategory::Scene, AdditiveIdempotent)
            }
            Self::SceneSave => {
                Annotation::new("Save Scene", ToolCategory::Scene, AdditiveIdempotent)
            }
        }
    }

    /// Instantiate the handler for this tool
    fn create_handler(self) -> Arc<dyn ToolFn> {
        match self {
            Self::AssetCopy => Arc::new(AssetCopy),
            Self::AssetCreate => Arc::new(AssetCreate),
            Self::AssetDelete => Arc::new(AssetDelete),
            Self::AssetMove => Arc::new(AssetMove),
            Self::AssetQueryInfo => Arc::new(AssetQueryInfo),
            Self::AssetQueryUrl => Arc::new(AssetQueryUrl),
            Self::AssetQueryUuid => Arc::new(AssetQueryUuid),
            Self::AssetReimport => Arc::new(AssetReimport),
            Self::AssetSave => Arc::new(AssetSave),
            Self::AssetSearch => Arc::new(AssetSearch),
            Self::ComponentAdd => Arc::new(ComponentAdd),
            Self::ComponentList => Arc::new(ComponentList),
            Self::ComponentRemove => Arc::new(ComponentRemove),
            Self::ComponentSetProperty => Arc::new(ComponentSetProperty),
            Self::ScriptAttach => Arc::new(ScriptAttach),
            Self::EditorExecute => Arc::new(EditorExecute),
            Self::EditorGetTraceLogPath => Arc::new(GetTraceLogPath),
            Self::EditorSetTracingLevel => Arc::new(SetTracingLevel),
            Self::NodeCreate => Arc::new(NodeCreate),
            Self::NodeDelete => Arc::new(NodeDelete),
            Self::NodeDuplicate => Arc::new(NodeDuplicate),
            Self::NodeFind => Arc::new(NodeFind),
            Self::NodeQuery => Arc::new(NodeQuery),
            Self::NodeReparent => Arc::new(NodeReparent),
            Self::NodeSetProperty => Arc::new(NodeSetProperty),
            Self::NodeSetTransform => Arc::new(NodeSetTransform),
            Self::SceneList => Arc::new(SceneList),
            Self::SceneNew => Arc::new(SceneNew),
            Self::SceneNodeTree => Arc::new(SceneNodeTree),
            Self::SceneOpen => Arc::new(SceneOpen),
            Self::SceneSave => Arc::new(SceneSave),
        }
    }

    /// The input-schema builder for this tool's parameter struct
    fn input_schema(self) -> fn() -> Arc<rmcp::model::JsonObject> {
        match self {
            Self::AssetCopy => schema_object_for::<AssetCopyParams>,
            Self::AssetCreate => schema_object_for::<AssetCreateParams>,
            Self::AssetDelete => schema_object_for::<AssetDeleteParams>,
            Self::AssetMove => schema_object_for::<AssetMoveParams>,
            Self::AssetQueryInfo => schema_object_for::<AssetQueryInfoParams>,
            Self::AssetQueryUrl => schema_object_for::<AssetQueryUrlParams>,
            Self::AssetQueryUuid => schema_object_for::<AssetQueryUuidParams>,
            Self::AssetReimport => schema_object_for::<AssetReimportParams>,
            Self::AssetSave => schema_object_for::<AssetSaveParams>,
            Self::AssetSearch => schema_object_for::<AssetSearchParams>,
            Self::ComponentAdd => schema_object_for::<ComponentAddParams>,
            Self::ComponentList => schema_object_for::<ComponentListParams>,
            Self::ComponentRemove => schema_object_for::<ComponentRemoveParams>,
            Self::ComponentSetProperty => schema_object_for::<ComponentSetPropertyParams>,
            Self::ScriptAttach => schema_object_for::<ScriptAttachParams>,
            Self::EditorExecute => schema_object_for::<EditorExecuteParams>,
            Self::EditorGetTraceLogPath => schema_object_for::<NoParams>,
            Self::EditorSetTracingLevel => schema_object_for::<SetTracingLevelParams>,
            Self::NodeCreate => schema_object_for::<NodeCreateParams>,
            Self::NodeDelete => schema_object_for::<NodeDeleteParams>,
            Self::NodeDuplicate => schema_object_for::<NodeDuplicateParams>,
            Self::NodeFind => schema_object_for::<NodeFindParams>,
            Self::NodeQuery => schema_object_for::<NodeQueryParams>,
            Self::NodeReparent => schema_object_for::<NodeReparentParams>,
            Self::NodeSetProperty => schema_object_for::<NodeSetPropertyParams>,
            Self::NodeSetTransform => schema_object_for::<NodeSetTransformParams>,
            Self::SceneList => schema_object_for::<SceneListParams>,
            Self::SceneNew => schema_object_for::<SceneNewParams>,
            Self::SceneNodeTree => schema_object_for::<SceneNodeTreeParams>,
            Self::SceneOpen => schema_object_for::<SceneOpenParams>,
            Self::SceneSave => schema_object_for::<SceneSaveParams>,
        }
    }

    /// Build the full tool definition for this name
    pub fn to_tool_def(self) -> ToolDef {
        ToolDef {
            tool_name: self,
            annotations: self.annotations(),
            handler: self.create_handler(),
            input_schema: self.input_schema(),
        }
    }
}

/// Definitions for every tool the server exposes
pub fn get_all_tool_definitions() -> Vec<ToolDef> {
    ToolName::iter().map(ToolName::to_tool_def).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_tool_names_are_snake_case_and_unique() {
        let mut seen = HashSet::new();
        for name in ToolName::iter() {
            let wire: &'static str = name.into();
            assert!(
                wire.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "tool name '{wire}' is not snake_case"
            );
            assert!(seen.insert(wire), "duplicate tool name '{wire}'");
        }
    }

    #[test]
    fn test_tool_names_round_trip_through_strings() {
        for name in ToolName::iter() {
            let parsed = ToolName::from_str(name.as_ref());
            assert!(matches!(parsed, Ok(back) if back == name));
        }
    }

    #[test]
    fn test_every_tool_has_a_definition() {
        let defs = get_all_tool_definitions();
        assert_eq!(defs.len(), ToolName::iter().count());
        for def in defs {
            assert!(!def.tool_name.description().is_empty());
            // Every input schema must be buildable
            let schema = (def.input_schema)();
            assert!(schema.contains_key("type"));
        }
    }
}
