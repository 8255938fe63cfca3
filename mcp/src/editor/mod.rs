//! Editor bridge communication: the only path to Cocos Creator.

mod client;
mod http_client;
mod json_rpc_builder;

pub use client::{EditorError, EditorResult, build_editor_url, execute_editor_request};
