//! Ergonomic tool annotations for editor tools

use rmcp::model::ToolAnnotations;
use strum::AsRefStr;

/// Tool categories for logical grouping and sorting
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, AsRefStr)]
pub enum ToolCategory {
    /// Asset database operations
    #[strum(serialize = "Asset")]
    Asset,
    /// Component operations on scene nodes
    #[strum(serialize = "Component")]
    Component,
    /// Server-local and passthrough tools
    #[strum(serialize = "Editor")]
    Editor,
    /// Trace log management
    #[strum(serialize = "Logging")]
    Logging,
    /// Scene node operations
    #[strum(serialize = "Node")]
    Node,
    /// Whole-scene operations
    #[strum(serialize = "Scene")]
    Scene,
}

/// Describes how a tool interacts with its environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentImpact {
    /// Tool only reads data, does not modify environment
    ReadOnly,
    /// Tool destroys/removes data, safe to repeat with same args
    DestructiveIdempotent,
    /// Tool adds/updates data, safe to repeat with same args
    AdditiveIdempotent,
    /// Tool adds/creates new data, creates new things if repeated
    AdditiveNonIdempotent,
}

/// Ergonomic tool annotations for editor tools
#[derive(Debug, Clone)]
pub struct Annotation {
    /// Display title shown by MCP clients
    pub title: String,
    /// Category used as a title prefix for grouping
    pub category: ToolCategory,
    /// Read/write/destroy characterization
    pub environment_impact: EnvironmentImpact,
}

impl Annotation {
    /// Build an annotation for one tool
    pub fn new(
        title: impl Into<String>,
        category: ToolCategory,
        environment_impact: EnvironmentImpact,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            environment_impact,
        }
    }
}

impl From<Annotation> for ToolAnnotations {
    fn from(annotation: Annotation) -> Self {
        let (read_only, destructive, idempotent) = match annotation.environment_impact {
            EnvironmentImpact::ReadOnly => (Some(true), None, None),
            EnvironmentImpact::DestructiveIdempotent | EnvironmentImpact::AdditiveIdempotent => {
                // MCP clients require destructive_hint: Some(true) to show annotations
                // So additive tools are marked "destructive" even though they're safe
                (Some(false), Some(true), Some(true))
            }
            EnvironmentImpact::AdditiveNonIdempotent => (Some(false), Some(true), Some(false)),
        };

        // Everything stays within the local editor process, so open_world_hint
        // is always false
        Self::from_raw(
            Some(annotation.title),
            read_only,
            destructive,
            idempotent,
            Some(false),
        )
    }
}
