//! MCP Tool definitions and handlers
//!
//! Defines the four document tools and routes calls to the facade.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use validator::Validate;

use crate::error::{McpError, MongoMcpError, Result, ValidationError};
use crate::mcp::types::{CallToolResult, Tool};
use crate::mongo::facade::DocumentFacade;
use crate::mongo::json::{to_document, to_optional_document};
use mongodb::bson::Document;

/// Arguments for `find_documents`
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct FindDocumentsArgs {
    /// Name of the collection to search
    #[validate(length(min = 1))]
    pub collection_name: String,

    /// MongoDB query filter; an empty object matches every document
    pub filter_query: Map<String, Value>,

    /// Fields to include or exclude; omit to return whole documents
    #[serde(default)]
    pub projection: Option<Map<String, Value>>,
}

/// Arguments for `update_documents`
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct UpdateDocumentsArgs {
    /// Name of the collection to update
    #[validate(length(min = 1))]
    pub collection_name: String,

    /// MongoDB query filter selecting the documents to update
    pub filter_query: Map<String, Value>,

    /// Update document, e.g. {"$set": {"field": "value"}}
    pub update_operation: Map<String, Value>,
}

/// Arguments for `delete_documents`
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct DeleteDocumentsArgs {
    /// Name of the collection to delete from
    #[validate(length(min = 1))]
    pub collection_name: String,

    /// MongoDB query filter selecting the documents to delete
    pub filter_query: Map<String, Value>,
}

/// Tool handler
pub struct ToolHandler {
    facade: DocumentFacade,
}

impl ToolHandler {
    /// Create a new tool handler
    pub fn new(facade: DocumentFacade) -> Self {
        Self { facade }
    }

    /// List all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![
            tool_def(
                "find_documents",
                "Searches for documents in a specified MongoDB collection.",
                schema_of::<FindDocumentsArgs>(),
            ),
            tool_def(
                "update_documents",
                "Updates documents in a specified MongoDB collection.",
                schema_of::<UpdateDocumentsArgs>(),
            ),
            tool_def(
                "delete_documents",
                "Deletes documents from a specified MongoDB collection.",
                schema_of::<DeleteDocumentsArgs>(),
            ),
            tool_def(
                "list_collections",
                "Lists all collection names in the current database.",
                json!({"type": "object", "properties": {}}),
            ),
        ]
    }

    /// Call a tool by name
    pub async fn call_tool(&self, name: &str, args: Value) -> CallToolResult {
        tracing::debug!("Calling tool {}", name);

        match name {
            "find_documents" => self.handle_find(args).await,
            "update_documents" => self.handle_update(args).await,
            "delete_documents" => self.handle_delete(args).await,
            "list_collections" => CallToolResult::text(self.facade.list_collections().await),
            _ => CallToolResult::error(McpError::UnknownTool { name: name.to_string() }.to_string()),
        }
    }

    // ==================== Tool Handlers ====================

    async fn handle_find(&self, args: Value) -> CallToolResult {
        let request = parse_args::<FindDocumentsArgs>(args).and_then(|a| {
            let filter = document_param("filter_query", a.filter_query)?;
            let projection = to_optional_document(a.projection.map(Value::Object))
                .map_err(|e| invalid_param("projection", e))?;
            Ok((a.collection_name, filter, projection))
        });

        match request {
            Ok((collection, filter, projection)) => CallToolResult::text(
                self.facade
                    .find_documents(&collection, filter, projection)
                    .await,
            ),
            Err(e) => CallToolResult::error(e.to_string()),
        }
    }

    async fn handle_update(&self, args: Value) -> CallToolResult {
        let request = parse_args::<UpdateDocumentsArgs>(args).and_then(|a| {
            let filter = document_param("filter_query", a.filter_query)?;
            let update = document_param("update_operation", a.update_operation)?;
            Ok((a.collection_name, filter, update))
        });

        match request {
            Ok((collection, filter, update)) => {
                CallToolResult::text(self.facade.update_documents(&collection, filter, update).await)
            }
            Err(e) => CallToolResult::error(e.to_string()),
        }
    }

    async fn handle_delete(&self, args: Value) -> CallToolResult {
        let request = parse_args::<DeleteDocumentsArgs>(args).and_then(|a| {
            let filter = document_param("filter_query", a.filter_query)?;
            Ok((a.collection_name, filter))
        });

        match request {
            Ok((collection, filter)) => {
                CallToolResult::text(self.facade.delete_documents(&collection, filter).await)
            }
            Err(e) => CallToolResult::error(e.to_string()),
        }
    }
}

// ==================== Argument Parsing ====================

fn parse_args<T>(args: Value) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = serde_json::from_value(args).map_err(|e| McpError::InvalidArguments {
        message: e.to_string(),
    })?;

    parsed.validate().map_err(|e| {
        MongoMcpError::Validation(ValidationError::InvalidParameter {
            name: e.field_errors().keys().next().map(|k| k.to_string()).unwrap_or_default(),
            message: e.to_string(),
        })
    })?;

    Ok(parsed)
}

fn document_param(name: &str, value: Map<String, Value>) -> Result<Document> {
    to_document(Value::Object(value)).map_err(|e| invalid_param(name, e))
}

fn invalid_param(name: &str, err: impl std::fmt::Display) -> MongoMcpError {
    MongoMcpError::Validation(ValidationError::InvalidParameter {
        name: name.to_string(),
        message: err.to_string(),
    })
}

// ==================== Schema Definitions ====================

fn tool_def(name: &str, description: &str, input_schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema,
    }
}

fn schema_of<T: JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T)).unwrap_or_else(|_| json!({"type": "object"}))
}
