//! Scene lifecycle tools (`scene` channel, plus asset queries for scene
//! discovery).

mod scene_list;
mod scene_new;
mod scene_node_tree;
mod scene_open;
mod scene_save;

pub use scene_list::{SceneList, SceneListParams};
pub use scene_new::{SceneNew, SceneNewParams};
pub use scene_node_tree::{SceneNodeTree, SceneNodeTreeParams};
pub use scene_open::{SceneOpen, SceneOpenParams};
pub use scene_save::{SceneSave, SceneSaveParams};
