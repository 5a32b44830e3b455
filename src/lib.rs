//! docent - curated MCP development documentation, served over MCP
//!
//! This crate provides:
//! - A static corpus of three MCP development guides, loaded once per process
//! - An excerpt engine that assembles per-category reports from the guides
//!   and narrows them with an optional case-insensitive query
//! - An MCP server over stdio exposing the engine as a single tool
//! - CLI commands for printing reports directly to the terminal

pub mod error;
pub mod excerpt;
pub mod guides;
pub mod mcp;

pub use error::{Error, Result};
