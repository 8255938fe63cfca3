use serde_json::json;

use super::tracing::get_trace_log_path;
use crate::tool::{HandlerContext, HandlerResponse, ResponseBuilder, ToolFn};

pub struct GetTraceLogPath;

impl ToolFn for GetTraceLogPath {
    fn call(&self, _ctx: &HandlerContext) -> HandlerResponse<'_> {
        Box::pin(async move {
            let log_path = get_trace_log_path();
            let (exists, file_size_bytes) = std::fs::metadata(&log_path)
                .map_or((false, None), |metadata| (true, Some(metadata.len())));

            Ok(ResponseBuilder::success()
                .message(format!("Trace log path: {}", log_path.display()))
                .data(json!({
                    "log_path": log_path.to_string_lossy(),
                    "exists": exists,
                    "file_size_bytes": file_size_bytes,
                }))
                .build())
        })
    }
}
