//! Scene-node tools (`scene` channel) and the node-type heuristics behind
//! them.

mod node_create;
mod node_delete;
mod node_duplicate;
mod node_find;
mod node_kind;
mod node_query;
mod node_reparent;
mod node_set_property;
mod node_set_transform;
pub mod support;
pub mod transform;
pub mod tree;

pub use node_create::{NodeCreate, NodeCreateParams};
pub use node_delete::{NodeDelete, NodeDeleteParams};
pub use node_duplicate::{NodeDuplicate, NodeDuplicateParams};
pub use node_find::{NodeFind, NodeFindParams};
pub use node_kind::NodeKind;
pub use node_query::{NodeQuery, NodeQueryParams};
pub use node_reparent::{NodeReparent, NodeReparentParams};
pub use node_set_property::{NodeSetProperty, NodeSetPropertyParams};
pub use node_set_transform::{NodeSetTransform, NodeSetTransformParams};
