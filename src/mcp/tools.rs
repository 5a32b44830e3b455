//! MCP tool definitions and handlers

use super::types::{ToolDefinition, ToolResult};
use crate::error::{Error, Result};
use crate::excerpt::{self, Category};
use crate::guides::GuideStore;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Name of the single tool exposed over MCP
pub const TOOL_NAME: &str = "docent";

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![ToolDefinition {
        name: TOOL_NAME.to_string(),
        description: "Access curated MCP development documentation, examples, and best practices. \
                      Returns excerpts from maintained guides to help you build MCP servers and clients effectively."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "operation": {
                    "type": "string",
                    "enum": [
                        "examples",
                        "web-docs",
                        "frameworks",
                        "server-basics",
                        "client-basics",
                        "best-practices",
                        "protocol-details",
                        "troubleshooting"
                    ],
                    "description": "The type of MCP documentation to retrieve"
                },
                "query": {
                    "type": "string",
                    "description": "Optional search query to filter the documentation"
                }
            },
            "required": ["operation"]
        }),
    }]
}

/// Handle a tool call
pub async fn handle_tool_call(
    name: &str,
    arguments: &HashMap<String, Value>,
    store: &GuideStore,
) -> ToolResult {
    match name {
        TOOL_NAME => handle_docs(arguments, store).await,
        _ => ToolResult::error(format!("Unknown tool: {}", name)),
    }
}

/// Handle the documentation tool
async fn handle_docs(arguments: &HashMap<String, Value>, store: &GuideStore) -> ToolResult {
    let (category, query) = match parse_arguments(arguments) {
        Ok(parsed) => parsed,
        Err(e) => return ToolResult::error(e.to_string()),
    };

    let library = match store.library().await {
        Ok(l) => l,
        Err(e) => return ToolResult::error(format!("Failed to load guides: {}", e)),
    };

    ToolResult::text(excerpt::build_report(library, category, query))
}

/// Validate tool arguments into a category and optional query
fn parse_arguments(arguments: &HashMap<String, Value>) -> Result<(Category, Option<&str>)> {
    let operation = match arguments.get("operation") {
        Some(Value::String(op)) => op,
        Some(_) => {
            return Err(Error::InvalidParameter(
                "operation must be a string".to_string(),
            ))
        }
        None => return Err(Error::MissingParameter("operation".to_string())),
    };

    let category: Category = operation.parse()?;

    let query = match arguments.get("query") {
        Some(Value::String(q)) => Some(q.as_str()),
        None => None,
        Some(_) => {
            return Err(Error::InvalidParameter(
                "query must be a string".to_string(),
            ))
        }
    };

    Ok((category, query))
}
