//! MCP Server implementation
//!
//! Implements the Model Context Protocol server for stdio transport. Each
//! request is handled on its own task; a single writer task serializes
//! responses so lines never interleave.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use crate::error::{MongoMcpError, Result};
use crate::mcp::tools::ToolHandler;
use crate::mcp::types::*;
use crate::mongo::facade::DocumentFacade;

/// MCP Server info
const SERVER_NAME: &str = "mongo_database_tools";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for MongoDB
#[derive(Clone)]
pub struct McpServer {
    /// Tool handler
    tool_handler: Arc<ToolHandler>,

    /// Whether the client sent `notifications/initialized`
    initialized: Arc<AtomicBool>,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(facade: DocumentFacade) -> Self {
        Self {
            tool_handler: Arc::new(ToolHandler::new(facade)),
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the client has completed the initialize handshake
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Run the server on stdio
    pub async fn run_stdio(&self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve newline-delimited JSON-RPC from `reader`, writing responses to `writer`.
    ///
    /// Returns once the reader hits EOF and every in-flight request has been answered.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
        let writer_task = tokio::spawn(write_responses(rx, writer));

        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            // A line that is not UTF-8 is one bad request, not a broken transport
            let line = match String::from_utf8(std::mem::take(&mut buf)) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Undecodable message: {}", e);
                    let response = JsonRpcResponse::error(None, JsonRpcError::parse_error(e.to_string()));
                    if tx.send(response).is_err() {
                        tracing::warn!("Response dropped: writer has stopped");
                    }
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            let server = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_message(&line).await {
                    if tx.send(response).is_err() {
                        tracing::warn!("Response dropped: writer has stopped");
                    }
                }
            });
        }

        tracing::info!("Input closed, waiting for in-flight requests");

        // The writer stops once every task has dropped its sender.
        drop(tx);
        writer_task.await.map_err(|e| {
            MongoMcpError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
        })?
    }

    /// Handle an incoming JSON-RPC message
    pub async fn handle_message(&self, message: &str) -> Option<JsonRpcResponse> {
        // Try to parse as request
        let request: JsonRpcRequest = match serde_json::from_str(message) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!("Unparseable message: {}", e);
                return Some(JsonRpcResponse::error(None, JsonRpcError::parse_error(e.to_string())));
            }
        };

        if request.is_notification() {
            self.handle_notification(&request);
            return None;
        }

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::invalid_request(format!("Unsupported jsonrpc version: {}", request.jsonrpc)),
            ));
        }

        // Handle the request
        let result = match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(),
            methods::PING => Ok(serde_json::json!({})),
            methods::LIST_TOOLS => self.handle_list_tools(),
            methods::CALL_TOOL => Ok(self.handle_call_tool(&request).await),
            _ => {
                return Some(JsonRpcResponse::error(
                    request.id,
                    JsonRpcError::method_not_found(&request.method),
                ))
            }
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::error(request.id, JsonRpcError::internal_error(e.to_string())),
        })
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            methods::INITIALIZED => {
                self.initialized.store(true, Ordering::SeqCst);
                tracing::info!("Client initialized");
            }
            other => tracing::debug!("Ignoring notification {}", other),
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self) -> Result<Value> {
        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability::default()),
            },
        };

        Ok(serde_json::to_value(result)?)
    }

    /// Handle list tools request
    fn handle_list_tools(&self) -> Result<Value> {
        let result = ListToolsResult {
            tools: self.tool_handler.list_tools(),
        };

        Ok(serde_json::to_value(result)?)
    }

    /// Handle call tool request
    async fn handle_call_tool(&self, request: &JsonRpcRequest) -> Value {
        let result = match request.params.as_ref() {
            Some(p) => match serde_json::from_value::<CallToolParams>(p.clone()) {
                Ok(params) => {
                    self.tool_handler
                        .call_tool(&params.name, params.arguments)
                        .await
                }
                Err(e) => CallToolResult::error(format!("Invalid tool parameters: {}", e)),
            },
            None => CallToolResult::error("Missing tool parameters"),
        };

        serde_json::to_value(result).unwrap_or_else(|e| {
            serde_json::json!({
                "content": [{"type": "text", "text": format!("Error: {}", e)}],
                "isError": true
            })
        })
    }
}

async fn write_responses<W>(mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>, mut writer: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_string(&response)?;
        line.push('\n');
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}
