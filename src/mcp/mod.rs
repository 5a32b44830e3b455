//! MCP (Model Context Protocol) server implementation
//!
//! Serves the documentation tool over stdio: JSON-RPC 2.0 messages, one
//! per line. stdout carries protocol frames only; diagnostics go to
//! stderr via `tracing`.

mod server;
mod tools;
mod types;

pub use server::McpServer;
pub use types::{McpError, McpRequest, McpResponse};
