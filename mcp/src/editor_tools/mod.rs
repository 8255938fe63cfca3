//! Editor-level tools: raw message passthrough and trace log control.

mod editor_execute;
mod get_trace_log_path;
mod set_tracing_level;
mod tracing;

pub use editor_execute::{EditorExecute, EditorExecuteParams};
pub use get_trace_log_path::GetTraceLogPath;
pub use set_tracing_level::{SetTracingLevel, SetTracingLevelParams};
pub use tracing::init_file_tracing;
