use std::str::FromStr;

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::tracing::{TracingLevel, get_trace_log_path, set_tracing_level};
use crate::error::Error;
use crate::tool::{HandlerContext, HandlerResponse, ResponseBuilder, ToolFn};

#[derive(Deserialize, JsonSchema)]
pub struct SetTracingLevelParams {
    /// Tracing level to set (error, warn, info, debug, trace)
    pub level: String,
}

pub struct SetTracingLevel;

impl ToolFn for SetTracingLevel {
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let params: SetTracingLevelParams = ctx.extract_typed_params()?;
            let level = TracingLevel::from_str(&params.level)
                .map_err(|e| Error::invalid("tracing level", e))?;

            set_tracing_level(level);

            Ok(ResponseBuilder::success()
                .message(format!("Set tracing level to {}", level.as_str()))
                .data(json!({
                    "tracing_level": level.as_str(),
                    "tracing_log_file": get_trace_log_path().to_string_lossy(),
                }))
                .build())
        })
    }
}
