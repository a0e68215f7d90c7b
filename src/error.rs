//! Error types for the MongoDB MCP Server
//!
//! This module defines the error hierarchy for all operations in the server.
//! Tool handlers never return these to the client directly; the facade turns
//! store failures into result strings.

use thiserror::Error;

/// Main error type for the MongoDB MCP Server
#[derive(Error, Debug)]
pub enum MongoMcpError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Document store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// MCP protocol errors
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    MissingEnvVar { var: String },

    #[error("Failed to load environment file {path}: {message}")]
    EnvFile { path: String, message: String },
}

/// Document store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Anything reported by the driver: connection, auth, malformed query, server-side failure
    #[error("{0}")]
    Driver(String),

    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    #[error("Worker failed: {message}")]
    WorkerFailed { message: String },
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid parameter: {name} - {message}")]
    InvalidParameter { name: String, message: String },
}

/// MCP protocol errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid tool arguments: {message}")]
    InvalidArguments { message: String },
}

/// Result type alias for MongoDB MCP operations
pub type Result<T> = std::result::Result<T, MongoMcpError>;

/// Result type alias for blocking store calls
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Driver(err.to_string())
    }
}
