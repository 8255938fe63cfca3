//! Handler trait shared by every tool.

use std::future::Future;
use std::pin::Pin;

use super::handler_context::HandlerContext;
use super::response::ToolResponse;
use crate::error::Result;

/// Type alias for the response from tool handlers
///
/// Breaking down the type:
/// - `Pin<Box<...>>`: Heap-allocated Future that won't move in memory
/// - `dyn Future`: Async function that can be awaited
/// - `Output = Result<ToolResponse>`: envelope, or an internal error the
///   dispatcher formats into an error envelope
/// - `+ Send + 'a`: Can be sent between threads, lifetime tied to handler
pub type HandlerResponse<'a> = Pin<Box<dyn Future<Output = Result<ToolResponse>> + Send + 'a>>;

/// Trait for tool handlers using the function pointer approach
pub trait ToolFn: Send + Sync {
    /// Handle the request and produce a response envelope
    fn call(&self, ctx: &HandlerContext) -> HandlerResponse<'_>;
}
