//! Tool registry framework: names, schemas, annotations, dispatch.

mod annotations;
mod handler_context;
mod parameters;
mod response;
mod schema;
mod tool_def;
mod tool_name;
mod types;

pub use annotations::{Annotation, EnvironmentImpact, ToolCategory};
pub use handler_context::HandlerContext;
pub use parameters::deserialize_port;
pub use response::{ResponseBuilder, ToolResponse};
pub use schema::schema_object_for;
pub use tool_def::ToolDef;
pub use tool_name::{ToolName, get_all_tool_definitions};
pub use types::{HandlerResponse, ToolFn};
