//! Component tools (`scene` channel component operations).

mod component_add;
mod component_list;
mod component_remove;
mod component_set_property;
mod script_attach;

pub use component_add::{ComponentAdd, ComponentAddParams};
pub use component_list::{ComponentList, ComponentListParams};
pub use component_remove::{ComponentRemove, ComponentRemoveParams};
pub use component_set_property::{ComponentSetProperty, ComponentSetPropertyParams};
pub use script_attach::{ScriptAttach, ScriptAttachParams};
