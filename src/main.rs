//! MongoDB MCP Server - Rust Implementation
//!
//! A Model Context Protocol (MCP) server for MongoDB.
//! Provides tools for finding, updating and deleting documents and listing collections.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use mongo_mcp_server_rust::config::Config;
use mongo_mcp_server_rust::error::Result;
use mongo_mcp_server_rust::mcp::server::McpServer;
use mongo_mcp_server_rust::mongo::client::MongoStore;
use mongo_mcp_server_rust::mongo::facade::DocumentFacade;
use mongo_mcp_server_rust::mongo::worker::BlockingPool;

/// MongoDB MCP Server
#[derive(Parser)]
#[command(name = "mongo-mcp-server")]
#[command(author, version, about = "MongoDB MCP Server - A Model Context Protocol server for MongoDB")]
struct Cli {
    /// Environment file to load instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for protocol messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env(cli.env_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("MONGO_URI and MONGO_DB_NAME must be set in the environment or a .env file.");
            std::process::exit(1);
        }
    };

    run_server(config).await
}

async fn run_server(config: Config) -> Result<()> {
    // The blocking driver cannot be built on an async worker
    let store = BlockingPool::new()
        .run("connect", move || MongoStore::connect(&config))
        .await?;

    tracing::info!("Serving MCP tools for database '{}'", store.database_name());

    let facade = DocumentFacade::new(Arc::new(store));

    // Create and run MCP server
    let server = McpServer::new(facade);
    server.run_stdio().await?;

    Ok(())
}
